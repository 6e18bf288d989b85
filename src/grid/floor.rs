//! Ground-plane reference grid drawn under the lattice.

use glam::Vec3;

use super::Segment;

/// Lines of a square grid on the y = 0 plane.
///
/// `steps` cells of size `step` on each side of the origin, so each axis
/// gets `2 * steps + 1` lines spanning `[-steps * step, steps * step]`.
pub fn floor_grid_lines(step: f32, steps: u32, rgba: [f32; 4]) -> Vec<Segment> {
    let extent = step * steps as f32;
    let steps = steps as i32;
    let mut lines = Vec::with_capacity(2 * (2 * steps as usize + 1));

    for i in -steps..=steps {
        let offset = i as f32 * step;
        // Parallel to X
        lines.push(Segment::solid(
            Vec3::new(-extent, 0.0, offset),
            Vec3::new(extent, 0.0, offset),
            rgba,
        ));
        // Parallel to Z
        lines.push(Segment::solid(
            Vec3::new(offset, 0.0, -extent),
            Vec3::new(offset, 0.0, extent),
            rgba,
        ));
    }

    lines
}
