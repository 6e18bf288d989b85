//! Orbit camera rig parameters.

/// Initial placement and control sensitivity of the orbit camera
#[derive(Debug, Clone)]
pub struct OrbitCameraConfig {
    /// Initial eye position (world units)
    pub eye: [f32; 3],

    /// Point the camera orbits around
    pub target: [f32; 3],

    /// Radians of yaw/pitch per pixel of mouse drag
    pub rotate_sensitivity: f32,

    /// Distance change per scroll line
    pub zoom_sensitivity: f32,

    /// Pitch limit (radians, ±) so the camera never flips over the pole
    pub max_pitch: f32,

    /// Allowed orbit distance (world units)
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 5.0, -10.0],
            target: [0.0, 3.0, 0.0],
            rotate_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
            max_pitch: 1.5,
            min_distance: 0.5,
            max_distance: 100.0,
        }
    }
}
