pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_orbit_handlers, wire_story_buttons};
