//! Per-frame streak mesh generation.

use glam::Vec3;

use super::Segment;
use crate::noise::NoiseField;
use crate::params::NoiseGridParams;

/// Map a lattice index onto `[min, max]`.
///
/// A single-sample axis has no span to spread over, so it sits at `min`.
pub fn lattice_coord(index: u32, resolution: u32, min: f32, max: f32) -> f32 {
    if resolution <= 1 {
        return min;
    }
    let t = index as f32 / (resolution - 1) as f32;
    min + t * (max - min)
}

/// Generate the streak segments for one frame.
///
/// Produces exactly `grid_resolution^3` segments, ordered with `y` outermost,
/// `x` in the middle and `z` innermost. Pure: the same params, time and noise
/// field always give the same sequence.
pub fn generate_segments<N>(params: &NoiseGridParams, elapsed_time_s: f32, noise: &N) -> Vec<Segment>
where
    N: NoiseField + ?Sized,
{
    let mut segments = Vec::with_capacity(params.segment_count());
    append_segments(&mut segments, params, elapsed_time_s, noise);
    segments
}

fn append_segments<N>(
    segments: &mut Vec<Segment>,
    params: &NoiseGridParams,
    elapsed_time_s: f32,
    noise: &N,
) where
    N: NoiseField + ?Sized,
{
    let noise_time = elapsed_time_s * params.time_frequency;

    // Lattice box: centered on the origin horizontally, resting on the floor
    let half = params.grid_size * 0.5;
    let extent_min = Vec3::new(-half, 0.0, -half);
    let extent_max = Vec3::new(half, params.grid_size, half);

    let res = params.grid_resolution;
    for y in 0..res {
        let pos_y = lattice_coord(y, res, extent_min.y, extent_max.y);
        for x in 0..res {
            let pos_x = lattice_coord(x, res, extent_min.x, extent_max.x);
            for z in 0..res {
                let pos_z = lattice_coord(z, res, extent_min.z, extent_max.z);
                let pos = Vec3::new(pos_x, pos_y, pos_z);

                let vel = sample_velocity(noise, pos * params.frequency, noise_time);
                let color = velocity_color(vel);

                segments.push(Segment::streak(pos, pos + vel * params.magnitude, color));
            }
        }
    }
}

/// Three 4D samples with a different argument order per axis.
///
/// The permutation decorrelates the axes so the field is not radially
/// symmetric. Keep it exactly as is.
fn sample_velocity<N>(noise: &N, p: Vec3, t: f32) -> Vec3
where
    N: NoiseField + ?Sized,
{
    Vec3::new(
        noise.signed_noise(p.x, p.y, p.z, t),
        noise.signed_noise(t, p.z, p.y, p.x),
        noise.signed_noise(p.z, t, p.y, p.x),
    )
}

/// Direction as color: each unit component in [-1, 1] maps to [0, 1].
fn velocity_color(vel: Vec3) -> Vec3 {
    (vel.normalize_or_zero() + Vec3::ONE) * 0.5
}

/// Retained streak mesh, rebuilt wholesale every frame.
///
/// Holds on to its allocation between frames so high resolutions do not
/// reallocate; the contents are always exactly what `generate_segments`
/// returns for the same inputs.
#[derive(Debug, Default)]
pub struct StreakMesh {
    segments: Vec<Segment>,
}

impl StreakMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mesh with the segments for `params` at `elapsed_time_s`
    pub fn rebuild<N>(&mut self, params: &NoiseGridParams, elapsed_time_s: f32, noise: &N)
    where
        N: NoiseField + ?Sized,
    {
        self.segments.clear();
        self.segments.reserve(params.segment_count());
        append_segments(&mut self.segments, params, elapsed_time_s, noise);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Vertex count when drawn as a line list (two per segment)
    pub fn vertex_count(&self) -> u32 {
        (self.segments.len() * 2) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseGenerator;
    use std::cell::RefCell;

    fn wavy(a: f32, b: f32, c: f32, d: f32) -> f32 {
        (a * 1.3 + b * 0.7 - c * 0.4 + d * 2.1).sin()
    }

    fn params(resolution: u32) -> NoiseGridParams {
        NoiseGridParams {
            frequency: 1.0,
            time_frequency: 0.0,
            magnitude: 0.3,
            grid_size: 6.0,
            grid_resolution: resolution,
        }
    }

    #[test]
    fn test_segment_count_is_resolution_cubed() {
        assert_eq!(generate_segments(&params(3), 0.0, &wavy).len(), 27);
        assert_eq!(generate_segments(&params(7), 1.5, &wavy).len(), 343);
    }

    #[test]
    fn test_max_resolution_segment_count() {
        let flat = |_: f32, _: f32, _: f32, _: f32| 0.0;
        assert_eq!(generate_segments(&params(100), 0.0, &flat).len(), 1_000_000);
    }

    #[test]
    fn test_start_vertices_within_lattice_box() {
        let p = NoiseGridParams {
            grid_size: 4.5,
            magnitude: 5.0,
            ..params(9)
        };
        let half = p.grid_size * 0.5;
        let eps = 1e-5;
        for segment in generate_segments(&p, 3.0, &wavy) {
            let [x, y, z] = segment.start.position;
            assert!(x >= -half - eps && x <= half + eps);
            assert!(z >= -half - eps && z <= half + eps);
            assert!(y >= -eps && y <= p.grid_size + eps);
        }
    }

    #[test]
    fn test_iteration_order_y_x_z() {
        let segments = generate_segments(&params(3), 0.0, &wavy);
        for (i, segment) in segments.iter().enumerate() {
            let y = (i / 9) as f32;
            let x = ((i / 3) % 3) as f32;
            let z = (i % 3) as f32;
            let expected = [x * 3.0 - 3.0, y * 3.0, z * 3.0 - 3.0];
            assert_eq!(segment.start.position, expected, "segment {}", i);
        }
    }

    #[test]
    fn test_corner_example_uses_permuted_samples() {
        let segments = generate_segments(&params(3), 0.0, &wavy);
        let corner = &segments[0];
        assert_eq!(corner.start.position, [-3.0, 0.0, -3.0]);

        // noise_pos = (-3, 0, -3), noise_time = 0
        let vel = Vec3::new(
            wavy(-3.0, 0.0, -3.0, 0.0),
            wavy(0.0, -3.0, 0.0, -3.0),
            wavy(-3.0, 0.0, 0.0, -3.0),
        );
        let expected_end = Vec3::new(-3.0, 0.0, -3.0) + vel * 0.3;
        let end = Vec3::from_array(corner.end.position);
        assert!(end.abs_diff_eq(expected_end, 1e-6), "{:?} vs {:?}", end, expected_end);

        let rgb = (vel.normalize() + Vec3::ONE) * 0.5;
        let color = Vec3::from_slice(&corner.start.color[..3]);
        assert!(color.abs_diff_eq(rgb, 1e-6));
    }

    #[test]
    fn test_noise_argument_permutation() {
        let calls = RefCell::new(Vec::new());
        let recorder = |a: f32, b: f32, c: f32, d: f32| {
            calls.borrow_mut().push([a, b, c, d]);
            0.5
        };
        let p = NoiseGridParams {
            frequency: 0.5,
            time_frequency: 2.0,
            ..params(3)
        };
        generate_segments(&p, 0.25, &recorder);

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 27 * 3);
        // First lattice point (-3, 0, -3) scaled by 0.5, noise time 0.5
        let (nx, ny, nz, t) = (-1.5, 0.0, -1.5, 0.5);
        assert_eq!(calls[0], [nx, ny, nz, t]);
        assert_eq!(calls[1], [t, nz, ny, nx]);
        assert_eq!(calls[2], [nz, t, ny, nx]);
    }

    #[test]
    fn test_end_vertex_is_start_plus_scaled_velocity() {
        let constant = |_: f32, _: f32, _: f32, _: f32| 0.5;
        let p = NoiseGridParams {
            magnitude: 2.0,
            ..params(4)
        };
        for segment in generate_segments(&p, 0.0, &constant) {
            let start = Vec3::from_array(segment.start.position);
            let end = Vec3::from_array(segment.end.position);
            assert!(end.abs_diff_eq(start + Vec3::splat(1.0), 1e-6));
        }
    }

    #[test]
    fn test_zero_magnitude_collapses_segments() {
        let p = NoiseGridParams {
            magnitude: 0.0,
            ..params(5)
        };
        for segment in generate_segments(&p, 2.0, &wavy) {
            assert_eq!(segment.start.position, segment.end.position);
        }
    }

    #[test]
    fn test_colors_share_rgb_and_fade_alpha() {
        for segment in generate_segments(&params(5), 0.7, &wavy) {
            assert_eq!(segment.start.color[..3], segment.end.color[..3]);
            assert_eq!(segment.start.color[3], 1.0);
            assert_eq!(segment.end.color[3], 0.0);
            for c in &segment.start.color[..3] {
                assert!((0.0..=1.0).contains(c));
            }
        }
    }

    #[test]
    fn test_zero_velocity_is_mid_gray() {
        let flat = |_: f32, _: f32, _: f32, _: f32| 0.0;
        for segment in generate_segments(&params(3), 0.0, &flat) {
            assert_eq!(segment.start.color, [0.5, 0.5, 0.5, 1.0]);
            assert_eq!(segment.start.position, segment.end.position);
        }
    }

    #[test]
    fn test_single_sample_axis_clamps_to_min() {
        assert_eq!(lattice_coord(0, 1, -2.0, 2.0), -2.0);
        assert_eq!(lattice_coord(0, 3, -2.0, 2.0), -2.0);
        assert_eq!(lattice_coord(2, 3, -2.0, 2.0), 2.0);

        // Below the GUI range, but the generator still behaves
        let segments = generate_segments(&params(1), 0.0, &wavy);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start.position, [-3.0, 0.0, -3.0]);
    }

    #[test]
    fn test_deterministic_with_real_noise() {
        let noise = NoiseGenerator::new(3);
        let p = NoiseGridParams {
            time_frequency: 1.0,
            ..params(6)
        };
        let a = generate_segments(&p, 12.5, &noise);
        let b = generate_segments(&p, 12.5, &noise);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rebuild_matches_generate_and_replaces_contents() {
        let noise = NoiseGenerator::new(9);
        let mut mesh = StreakMesh::new();

        mesh.rebuild(&params(8), 1.0, &noise);
        assert_eq!(mesh.segments().len(), 512);
        assert_eq!(mesh.vertex_count(), 1024);

        let p = NoiseGridParams {
            time_frequency: 0.5,
            ..params(4)
        };
        mesh.rebuild(&p, 2.0, &noise);
        assert_eq!(mesh.segments(), generate_segments(&p, 2.0, &noise).as_slice());
    }
}
