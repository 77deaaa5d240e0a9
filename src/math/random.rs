//! Random number sources used by site generation

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

/// Uniform and Gaussian draws consumed by site generation
///
/// Generation calls these in a fixed order, so a deterministic source yields
/// identical sites for identical parameters.
pub trait RandomSource {
    /// Uniformly drawn integer in `[0, bound)`; returns 0 when `bound` is 0
    fn uniform_index(&mut self, bound: usize) -> usize;

    /// Gaussian draw with the given mean and standard deviation
    ///
    /// A standard deviation of zero yields exactly `mean`.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// Seeded random source for reproducible diagrams
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        std_dev.mul_add(z, mean)
    }
}
