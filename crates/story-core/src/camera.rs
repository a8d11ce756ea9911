//! Per-scene camera and the orbit rig that lets the reader look around.
//!
//! Nothing here touches a graphics API; the frontends turn a [`Camera`] into
//! view/projection matrices for their own pipelines.

use crate::constants::{
    CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_ASPECT, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR, ORBIT_RADIANS_PER_PIXEL,
};
use glam::{Mat4, Vec3};

/// Where a scene's camera starts every time the scene is activated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPreset {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
}

impl CameraPreset {
    pub const fn new(eye: [f32; 3], target: [f32; 3], fov_degrees: f32) -> Self {
        Self {
            eye: Vec3::from_array(eye),
            target: Vec3::from_array(target),
            fov_degrees,
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_preset(preset: &CameraPreset) -> Self {
        Self {
            eye: preset.eye,
            target: preset.target,
            up: Vec3::Y,
            aspect: DEFAULT_ASPECT,
            fovy_radians: preset.fov_degrees.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera-space right and up axes in world space, for billboards.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

/// Damped orbit around the preset's look-at point.
///
/// Pointer drags queue a rotation; `apply` releases a fraction of it each
/// frame so the camera glides to rest. Polar angle stays inside
/// [`ORBIT_MIN_POLAR`, `ORBIT_MAX_POLAR`] measured from +Y.
#[derive(Clone, Debug, Default)]
pub struct OrbitRig {
    pending_azimuth: f32,
    pending_polar: f32,
    zoom: f32,
}

impl OrbitRig {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.pending_azimuth -= dx_px * ORBIT_RADIANS_PER_PIXEL;
        self.pending_polar -= dy_px * ORBIT_RADIANS_PER_PIXEL;
    }

    /// `factor` > 1 moves away from the target, < 1 moves closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom += factor.ln();
        }
    }

    pub fn is_settled(&self) -> bool {
        self.pending_azimuth.abs() < 1e-5 && self.pending_polar.abs() < 1e-5 && self.zoom.abs() < 1e-5
    }

    pub fn apply(&mut self, camera: &mut Camera, dt_sec: f32) {
        if self.is_settled() {
            return;
        }
        let frames = (dt_sec * 60.0).max(0.0);
        let share = 1.0 - (1.0 - ORBIT_DAMPING).powf(frames);

        let d_azimuth = self.pending_azimuth * share;
        let d_polar = self.pending_polar * share;
        let d_zoom = self.zoom * share;
        self.pending_azimuth -= d_azimuth;
        self.pending_polar -= d_polar;
        self.zoom -= d_zoom;

        let offset = camera.eye - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        let polar = (polar + d_polar).clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
        let azimuth = azimuth + d_azimuth;
        let radius = (radius * d_zoom.exp()).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);

        let sin_polar = polar.sin();
        camera.eye = camera.target
            + Vec3::new(
                radius * sin_polar * azimuth.sin(),
                radius * polar.cos(),
                radius * sin_polar * azimuth.cos(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::from_preset(&CameraPreset::new([0.0, 10.0, 20.0], [0.0, 0.0, 0.0], 60.0))
    }

    #[test]
    fn dragging_down_hard_stops_at_the_ground() {
        let mut cam = camera();
        let mut rig = OrbitRig::default();
        rig.drag(0.0, -100_000.0);
        for _ in 0..600 {
            rig.apply(&mut cam, 1.0 / 60.0);
        }
        let offset = cam.eye - cam.target;
        let polar = (offset.y / offset.length()).acos();
        assert!(polar <= ORBIT_MAX_POLAR + 1e-4);
        assert!(cam.eye.y >= -1e-3);
    }

    #[test]
    fn orbit_keeps_distance_to_target() {
        let mut cam = camera();
        let before = (cam.eye - cam.target).length();
        let mut rig = OrbitRig::default();
        rig.drag(250.0, 0.0);
        for _ in 0..120 {
            rig.apply(&mut cam, 1.0 / 60.0);
        }
        let after = (cam.eye - cam.target).length();
        assert!((before - after).abs() < 1e-3);
        assert!(cam.eye.x.abs() > 0.1);
    }

    #[test]
    fn resize_ignores_zero_sized_viewports() {
        let mut cam = camera();
        cam.set_viewport(800, 400);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
        cam.set_viewport(0, 400);
        assert!((cam.aspect - 2.0).abs() < 1e-6);
    }
}
