//! Injectable randomness for the stochastic engine operations.
//!
//! The engine never owns a generator; custom-offer jitter and the decision
//! simulation each take a draw source per call so outcomes stay reproducible
//! under a fixed seed and no process-wide random state exists.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws.
pub trait UniformSource {
    /// Single draw uniformly distributed over `[lo, hi)`.
    fn draw(&mut self, lo: f64, hi: f64) -> f64;

    /// Single draw uniformly distributed over `[0, 1)`.
    fn draw_unit(&mut self) -> f64 {
        self.draw(0.0, 1.0)
    }
}

/// Seedable draw source backed by [`StdRng`].
pub struct SeededUniform {
    rng: StdRng,
}

impl SeededUniform {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl UniformSource for SeededUniform {
    fn draw(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.gen_range(lo..hi)
    }
}
