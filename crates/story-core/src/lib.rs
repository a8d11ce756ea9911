pub mod camera;
pub mod constants;
pub mod draw;
pub mod environment;
pub mod error;
pub mod fade;
pub mod presenter;
pub mod routes;
pub mod scene;
pub mod sequencer;
pub mod story;

pub use camera::*;
pub use constants::*;
pub use environment::*;
pub use error::*;
pub use fade::*;
pub use presenter::*;
pub use routes::*;
pub use scene::*;
pub use sequencer::*;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
