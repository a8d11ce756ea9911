// Host page contract: element ids the web frontend expects.

pub const CANVAS_ID: &str = "story-canvas";

// Scene-owned panels
pub const TITLE_UI_ID: &str = "title-ui";
pub const NEXT_BUTTON_ID: &str = "next-btn";
pub const CHOICE_BUTTONS_ID: &str = "choice-buttons";
pub const ENDING_A_ID: &str = "ending-a";
pub const ENDING_B_ID: &str = "ending-b";

// Buttons inside panels
pub const CHOICE_A_ID: &str = "choice-a";
pub const CHOICE_B_ID: &str = "choice-b";
pub const RESTART_BUTTON_IDS: [&str; 2] = ["restart-a", "restart-b"];

// Fade veil; the `active` class turns it white (CSS owns the animation)
pub const OVERLAY_ID: &str = "transition-overlay";
pub const OVERLAY_ACTIVE_CLASS: &str = "active";

// CSS display value used when a panel is shown
pub const DISPLAY_BLOCK: &str = "display:block";
pub const DISPLAY_FLEX: &str = "display:flex"; // choice buttons sit side by side
pub const DISPLAY_NONE: &str = "display:none";

// Body attribute naming the active scene, for per-scene styling
pub const SCENE_ATTRIBUTE: &str = "data-scene";

// Wheel delta (pixels) that doubles/halves the orbit distance
pub const WHEEL_PIXELS_PER_DOUBLING: f32 = 600.0;

// Clamp for long frames (tab switched away) so the fade doesn't jump
pub const MAX_FRAME_DT_MS: u64 = 100;
