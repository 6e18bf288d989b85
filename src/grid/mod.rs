//! Noise-perturbed lattice rendered as fading line streaks.

mod floor;
mod mesh;
mod system;

// Re-export public types
pub use floor::floor_grid_lines;
pub use mesh::{generate_segments, lattice_coord, StreakMesh};
pub use system::GridSystem;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex data for line meshes (position + RGBA color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// One independent two-vertex line primitive.
///
/// `#[repr(C)]` so a `&[Segment]` casts straight into a line-list vertex
/// buffer: every consecutive vertex pair is one segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Segment {
    pub start: LineVertex,
    pub end: LineVertex,
}

impl Segment {
    /// Streak from `start` to `end`, opaque at the start and fully
    /// transparent at the end, both sharing `rgb`.
    pub fn streak(start: Vec3, end: Vec3, rgb: Vec3) -> Self {
        Self {
            start: LineVertex {
                position: start.to_array(),
                color: rgb.extend(1.0).to_array(),
            },
            end: LineVertex {
                position: end.to_array(),
                color: rgb.extend(0.0).to_array(),
            },
        }
    }

    /// Solid line with the same color at both ends
    pub fn solid(start: Vec3, end: Vec3, rgba: [f32; 4]) -> Self {
        Self {
            start: LineVertex {
                position: start.to_array(),
                color: rgba,
            },
            end: LineVertex {
                position: end.to_array(),
                color: rgba,
            },
        }
    }
}
