use crate::constants::WHEEL_PIXELS_PER_DOUBLING;
use story_core::Trigger;

/// Pointer drag bookkeeping for orbiting the camera.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: [f32; 2],
}

impl DragState {
    pub fn begin(&mut self, x: f32, y: f32) {
        self.active = true;
        self.last = [x, y];
    }

    /// Pixel delta since the last pointer position, while dragging.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<[f32; 2]> {
        if !self.active {
            return None;
        }
        let d = [x - self.last[0], y - self.last[1]];
        self.last = [x, y];
        Some(d)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

/// Wheel delta (pixels, positive = scroll down) to an orbit distance factor.
#[inline]
pub fn wheel_zoom_factor(delta_y: f64) -> f32 {
    let d = (delta_y as f32).clamp(-WHEEL_PIXELS_PER_DOUBLING, WHEEL_PIXELS_PER_DOUBLING);
    (d / WHEEL_PIXELS_PER_DOUBLING).exp2()
}

/// Keys a focused button treats as a click.
#[inline]
fn activates_focused_button(key: &str) -> bool {
    matches!(key, " " | "Enter")
}

/// Trigger for a window-level keydown, or None if the key is unbound, held
/// down, or belongs to the focused button's own click.
pub fn key_trigger(key: &str, repeat: bool, target_is_button: bool) -> Option<Trigger> {
    if repeat || (target_is_button && activates_focused_button(key)) {
        return None;
    }
    Trigger::from_key(key)
}
