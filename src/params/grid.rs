//! Noise grid generation parameters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Parameters driving the streak mesh, edited live from the GUI panel.
///
/// Values are a plain snapshot: the panel owns a working copy and the frame
/// loop hands the current snapshot to the generator every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseGridParams {
    /// Spatial noise scale (noise cycles per world unit)
    pub frequency: f32,

    /// Temporal noise scale (noise units per second)
    pub time_frequency: f32,

    /// Streak length multiplier applied to the raw noise velocity
    pub magnitude: f32,

    /// World-space extent of the lattice cube
    pub grid_size: f32,

    /// Lattice samples per axis (total segments = resolution^3)
    pub grid_resolution: u32,
}

impl NoiseGridParams {
    pub const FREQUENCY_RANGE: RangeInclusive<f32> = 0.01..=2.0;
    pub const TIME_FREQUENCY_RANGE: RangeInclusive<f32> = 0.001..=3.0;
    pub const MAGNITUDE_RANGE: RangeInclusive<f32> = 0.0..=5.0;
    pub const GRID_SIZE_RANGE: RangeInclusive<f32> = 0.01..=20.0;
    /// Capped at 100 so a frame never exceeds 1,000,000 segments
    pub const GRID_RESOLUTION_RANGE: RangeInclusive<u32> = 3..=100;

    /// Copy with every field clamped into its documented range.
    ///
    /// Applied where values enter the program (settings file, CLI); the
    /// generator itself trusts its input.
    pub fn clamped(self) -> Self {
        Self {
            frequency: clamp_f32(self.frequency, &Self::FREQUENCY_RANGE),
            time_frequency: clamp_f32(self.time_frequency, &Self::TIME_FREQUENCY_RANGE),
            magnitude: clamp_f32(self.magnitude, &Self::MAGNITUDE_RANGE),
            grid_size: clamp_f32(self.grid_size, &Self::GRID_SIZE_RANGE),
            grid_resolution: self.grid_resolution.clamp(
                *Self::GRID_RESOLUTION_RANGE.start(),
                *Self::GRID_RESOLUTION_RANGE.end(),
            ),
        }
    }

    /// Number of segments one frame produces
    pub fn segment_count(&self) -> usize {
        (self.grid_resolution as usize).pow(3)
    }
}

impl Default for NoiseGridParams {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            time_frequency: 1.0,
            magnitude: 0.3,
            grid_size: 6.0,
            grid_resolution: 20,
        }
    }
}

// NaN falls back to the lower bound so a corrupt settings file stays usable
fn clamp_f32(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
