//! Orbit camera with a slow cinematic idle spin.

use glam::{Mat4, Vec3};

/// Idle spin, radians per second.
const AUTO_ROTATE_SPEED: f32 = 0.03;
/// Zoom limits keep the whole cloud in frame without clipping into it.
const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 40.0;
/// Pitch limits stop the orbit short of the poles and of the underside.
const MIN_PITCH: f32 = -0.52;
const MAX_PITCH: f32 = 1.5;

const FOV_Y: f32 = 50.0;

/// Camera orbiting the scene origin.
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.1,
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            target: Vec3::ZERO,
        }
    }

    /// Apply a mouse drag, in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * 0.005;
        self.pitch = (self.pitch + dy * 0.005).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Apply a scroll step; positive zooms in.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - scroll * 1.5).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advance the idle spin.
    pub fn auto_rotate(&mut self, delta: f32) {
        self.yaw += AUTO_ROTATE_SPEED * delta;
    }

    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(FOV_Y.to_radians(), aspect, 0.1, 200.0);
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut camera = OrbitCamera::new(20.0);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_pitch_clamps_to_limits() {
        let mut camera = OrbitCamera::new(20.0);
        camera.orbit(0.0, 10_000.0);
        assert_eq!(camera.pitch, MAX_PITCH);
        camera.orbit(0.0, -20_000.0);
        assert_eq!(camera.pitch, MIN_PITCH);
    }

    #[test]
    fn test_position_respects_distance() {
        let camera = OrbitCamera::new(20.0);
        assert!((camera.position().length() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_auto_rotate_advances_yaw() {
        let mut camera = OrbitCamera::new(20.0);
        let before = camera.yaw;
        camera.auto_rotate(1.0);
        assert!(camera.yaw > before);
    }
}
