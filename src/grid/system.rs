//! High-level grid system tying the noise source to the streak mesh.

use super::mesh::StreakMesh;
use super::{floor_grid_lines, Segment};
use crate::noise::NoiseGenerator;
use crate::params::{NoiseGridParams, RenderConfig};

/// Streak mesh plus the static floor grid it is drawn over
pub struct GridSystem {
    pub mesh: StreakMesh,
    pub floor: Vec<Segment>,
    noise: NoiseGenerator,
}

impl GridSystem {
    /// Create new grid system with a seeded noise source
    pub fn new(noise_seed: u32, render_config: &RenderConfig) -> Self {
        let gray = render_config.floor_gray as f32 / 255.0;
        let floor = floor_grid_lines(
            render_config.floor_step,
            render_config.floor_steps,
            [gray, gray, gray, 1.0],
        );

        Self {
            mesh: StreakMesh::new(),
            floor,
            noise: NoiseGenerator::new(noise_seed),
        }
    }

    /// Regenerate the streaks for this frame
    ///
    /// # Arguments
    /// * `time_s` - Seconds since start
    /// * `params` - Current parameter snapshot from the panel
    pub fn update(&mut self, time_s: f32, params: &NoiseGridParams) {
        self.mesh.rebuild(params, time_s, &self.noise);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tracks_resolution_changes() {
        let mut grid = GridSystem::new(1, &RenderConfig::default());
        assert_eq!(grid.floor.len(), 42);

        let mut params = NoiseGridParams::default();
        grid.update(0.5, &params);
        assert_eq!(grid.mesh.segments().len(), 20 * 20 * 20);

        params.grid_resolution = 3;
        grid.update(0.6, &params);
        assert_eq!(grid.mesh.segments().len(), 27);
    }
}
