//! Randomness for firework bursts.
//!
//! [`SpawnContext`] wraps a small, seedable RNG and hands out the randomized
//! per-particle values a burst needs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::ops::Range;

/// Source of randomized angles and speeds for spawned particles.
#[derive(Debug, Clone)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Seeded from the wall clock, so every run looks different.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(seed)
    }

    /// Deterministic sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Direction uniform over the full circle, in radians `[0, 2π)`.
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Speed uniform in `range` (half-open). An empty range, or one whose
    /// span is not finite, yields `range.start`.
    #[inline]
    pub fn random_speed(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() || !(range.end - range.start).is_finite() {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}
