//! Parameter definitions with units and documented semantics.
//!
//! All tunable numbers live here with:
//! - World units (the lattice box is measured in scene units, time in seconds)
//! - Documented ranges and meanings
//! - Type safety where possible

mod camera;
mod grid;
mod render;

// Re-export all types
pub use camera::OrbitCameraConfig;
pub use grid::NoiseGridParams;
pub use render::{RecordingConfig, RenderConfig};
