//! Noise sampling for the streak field.
//!
//! The generator only needs a 4D signed noise function; `NoiseField` is that
//! seam. `NoiseGenerator` backs it with OpenSimplex from the `noise` crate.

use noise::{NoiseFn, OpenSimplex};

/// A 4D signed noise function returning values in [-1, 1].
///
/// Implementations must be pure: identical inputs give identical outputs.
pub trait NoiseField {
    fn signed_noise(&self, a: f32, b: f32, c: f32, d: f32) -> f32;
}

impl<F> NoiseField for F
where
    F: Fn(f32, f32, f32, f32) -> f32,
{
    fn signed_noise(&self, a: f32, b: f32, c: f32, d: f32) -> f32 {
        self(a, b, c, d)
    }
}

/// Noise generator for the streak field
pub struct NoiseGenerator {
    simplex: OpenSimplex,
}

impl NoiseGenerator {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
        }
    }

    /// Sample 4D simplex noise at position
    ///
    /// Returns value in range [-1, 1]
    pub fn sample_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f32 {
        // OpenSimplex can overshoot slightly; colors rely on the [-1, 1] bound
        (self.simplex.get([x, y, z, w]) as f32).clamp(-1.0, 1.0)
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseField for NoiseGenerator {
    fn signed_noise(&self, a: f32, b: f32, c: f32, d: f32) -> f32 {
        self.sample_4d(a as f64, b as f64, c as f64, d as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_is_bounded() {
        let noise = NoiseGenerator::new(7);
        for i in 0..500 {
            let t = i as f32 * 0.173;
            let v = noise.signed_noise(t, -t * 0.5, t * 1.7, t * 0.01);
            assert!((-1.0..=1.0).contains(&v), "noise out of range: {}", v);
        }
    }

    #[test]
    fn test_noise_is_deterministic() {
        let a = NoiseGenerator::new(42);
        let b = NoiseGenerator::new(42);
        for i in 0..50 {
            let t = i as f32 * 0.37;
            assert_eq!(
                a.signed_noise(t, 1.0, -t, 0.5),
                b.signed_noise(t, 1.0, -t, 0.5)
            );
        }
    }

    #[test]
    fn test_closure_field() {
        let field = |a: f32, b: f32, _c: f32, _d: f32| a - b;
        assert_eq!(field.signed_noise(0.75, 0.25, 9.0, 9.0), 0.5);
    }
}
