use std::time::Duration;

// Shared timing/tuning constants used by both web and native frontends.

// Transition veil
pub const FADE_COVER: Duration = Duration::from_millis(800); // white veil rises, then scenes swap
pub const FADE_REVEAL: Duration = Duration::from_millis(500); // veil held, then lifted
pub const VEIL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Endings appear a little after their scene settles
pub const ENDING_REVEAL_DELAY: Duration = Duration::from_millis(2000);

// Title clouds
pub const CLOUD_COUNT: usize = 8;
pub const CLOUD_DRIFT_PER_SEC: f32 = 0.6; // multiplied by (cloud index + 1)
pub const CLOUD_WRAP_X: f32 = 15.0;

// Camera projection
pub const TITLE_FOV_DEGREES: f32 = 75.0;
pub const STORY_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

// Orbit controls
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::PI * 0.1; // don't climb over the top
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI * 0.5; // don't dip under the ground
pub const ORBIT_DAMPING: f32 = 0.08; // fraction of pending rotation applied per 60 Hz frame
pub const ORBIT_RADIANS_PER_PIXEL: f32 = 0.005;
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;

// Seed for scattered props (rocks, trees, clouds)
pub const PROP_SEED: u64 = 0x5EA_9A1A_CE;
