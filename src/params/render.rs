//! Rendering and recording configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Background gradient color at the screen center (sRGB, 0-255)
    pub background_inner: [u8; 3],

    /// Background gradient color at the screen edges (sRGB, 0-255)
    pub background_outer: [u8; 3],

    /// Floor grid spacing and number of cells on each side of the origin
    pub floor_step: f32,
    pub floor_steps: u32,

    /// Floor grid line gray level (0-255)
    pub floor_gray: u8,

    /// Parameter panel width (logical pixels)
    pub gui_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            fov_degrees: 60.0,
            near_plane: 0.01,
            far_plane: 512.0,
            background_inner: [40, 40, 40],
            background_outer: [0, 0, 0],
            floor_step: 10.0,
            floor_steps: 10,
            floor_gray: 60,
            gui_width: 260.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }

    /// Path of a single captured frame
    pub fn frame_path(&self, frame_num: usize) -> String {
        format!("{}/frame_{:05}.png", self.frames_dir(), frame_num)
    }

    /// Scene time for a frame, independent of how long capture takes
    pub fn frame_time_s(&self, frame_num: usize) -> f32 {
        frame_num as f32 / self.fps as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_frame_math() {
        let config = RecordingConfig::new(2.5);
        assert_eq!(config.total_frames(), 150);
        assert_eq!(config.frame_path(7), "recording/frames/frame_00007.png");
        assert!((config.frame_time_s(30) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_aspect_ratio() {
        let config = RenderConfig::default();
        assert!((config.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }
}
