//! Orbit camera for viewing the noise grid.

use glam::{Mat4, Vec3};

use crate::params::{OrbitCameraConfig, RenderConfig};

/// Mouse-driven orbit camera
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians
    pub yaw: f32,
    /// Vertical rotation angle in radians
    pub pitch: f32,
    /// Distance from the target point
    pub distance: f32,
    /// Point the camera orbits around
    pub target: Vec3,
    config: OrbitCameraConfig,
}

impl OrbitCamera {
    /// Create camera placed at the configured eye, looking at the target
    pub fn new(config: OrbitCameraConfig) -> Self {
        let eye = Vec3::from_array(config.eye);
        let target = Vec3::from_array(config.target);
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target,
            config,
        };
        camera.look_from(eye, target);
        camera
    }

    /// Derive yaw/pitch/distance so the camera sits at `eye` facing `target`
    pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        let length = offset.length();
        let max_pitch = self.config.max_pitch;

        self.target = target;
        self.distance = length.clamp(self.config.min_distance, self.config.max_distance);
        self.pitch = if length > 0.0 {
            (offset.y / length).clamp(-1.0, 1.0).asin().clamp(-max_pitch, max_pitch)
        } else {
            0.0
        };
        self.yaw = offset.x.atan2(offset.z);
    }

    /// Calculate the camera's world position
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Orbit by a mouse drag delta (pixels)
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let max_pitch = self.config.max_pitch;
        self.yaw -= dx * self.config.rotate_sensitivity;
        self.pitch = (self.pitch + dy * self.config.rotate_sensitivity).clamp(-max_pitch, max_pitch);
    }

    /// Move toward (positive) or away from (negative) the target
    pub fn zoom(&mut self, scroll_lines: f32) {
        self.distance = (self.distance - scroll_lines * self.config.zoom_sensitivity)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Slide the target in the view plane by a mouse drag delta (pixels)
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        // Scale with distance so panning feels the same when zoomed out
        let scale = self.distance * 0.002;
        self.target += (-right * dx + up * dy) * scale;
    }

    /// Reset to the configured starting view
    pub fn reset(&mut self) {
        let eye = Vec3::from_array(self.config.eye);
        let target = Vec3::from_array(self.config.target);
        self.look_from(eye, target);
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, render_config: &RenderConfig) -> Mat4 {
        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(self.position(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        proj * view
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitCameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_matches_config() {
        let camera = OrbitCamera::default();
        let eye = camera.position();

        assert!(eye.abs_diff_eq(Vec3::new(0.0, 5.0, -10.0), 1e-4), "{:?}", eye);
        assert_eq!(camera.target, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_start_view_respects_limits() {
        // Straight overhead and far beyond the zoom range
        let camera = OrbitCamera::new(OrbitCameraConfig {
            eye: [0.0, 500.0, 0.0],
            target: [0.0, 0.0, 0.0],
            ..OrbitCameraConfig::default()
        });
        assert_eq!(camera.distance, 100.0);
        assert_eq!(camera.pitch, 1.5);

        // Eye on the target
        let camera = OrbitCamera::new(OrbitCameraConfig {
            eye: [1.0, 2.0, 3.0],
            target: [1.0, 2.0, 3.0],
            ..OrbitCameraConfig::default()
        });
        assert_eq!(camera.distance, 0.5);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.rotate(0.0, 10_000.0);
        assert_eq!(camera.pitch, 1.5);
        camera.rotate(0.0, -100_000.0);
        assert_eq!(camera.pitch, -1.5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom(1000.0);
        assert_eq!(camera.distance, 0.5);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, 100.0);
    }

    #[test]
    fn test_pan_keeps_distance() {
        let mut camera = OrbitCamera::default();
        let before = camera.distance;
        camera.pan(40.0, -25.0);

        assert_ne!(camera.target, Vec3::new(0.0, 3.0, 0.0));
        assert!((camera.position().distance(camera.target) - before).abs() < 1e-4);

        camera.reset();
        assert!(camera.target.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), 1e-6));
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = OrbitCamera::default();
        let view_proj = camera.view_proj(&RenderConfig::default());

        // Matrix should not be identity or zero
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);

        // Target projects in front of the camera, near the screen center
        let clip = view_proj * camera.target.extend(1.0);
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 1e-4);
        assert!((clip.y / clip.w).abs() < 1e-4);
    }
}
