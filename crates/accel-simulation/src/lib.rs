//! Gaussian random-walk simulation
//!
//! A walk is the cumulative sum of i.i.d. normal increments drawn from a
//! generator seeded explicitly, so identical seeds give identical paths.
//!
//! ```rust
//! use accel_simulation::{random_walk, DEFAULT_SEED};
//!
//! let path = random_walk(100, DEFAULT_SEED);
//! assert_eq!(path.len(), 100);
//! assert_eq!(path, random_walk(100, DEFAULT_SEED));
//! ```

use accel_core::{Error, Result};
use rand::prelude::*;
use rand_distr::{Normal, StandardNormal};
use tracing::debug;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 987_654_321;

/// Cumulative sum of `n` standard normal draws
pub fn random_walk(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    cumulative(StandardNormal.sample_iter(&mut rng).take(n), 0.0)
}

fn cumulative(steps: impl Iterator<Item = f64>, start: f64) -> Vec<f64> {
    steps
        .scan(start, |position, step| {
            *position += step;
            Some(*position)
        })
        .collect()
}

/// Configurable random walk
///
/// ```rust
/// use accel_simulation::RandomWalk;
///
/// let path = RandomWalk::new(50)
///     .with_seed(1)
///     .with_start(100.0)
///     .with_step_sd(0.0)
///     .generate()
///     .unwrap();
/// assert!(path.iter().all(|&p| p == 100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    steps: usize,
    seed: u64,
    start: f64,
    step_sd: f64,
}

impl RandomWalk {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            seed: DEFAULT_SEED,
            start: 0.0,
            step_sd: 1.0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Position before the first step; it is not part of the output
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Standard deviation of each increment
    pub fn with_step_sd(mut self, step_sd: f64) -> Self {
        self.step_sd = step_sd;
        self
    }

    /// Generate the path, one position per step
    pub fn generate(&self) -> Result<Vec<f64>> {
        if !(self.step_sd >= 0.0 && self.step_sd.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "Step standard deviation {} must be finite and non-negative",
                self.step_sd
            )));
        }
        if !self.start.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Start position {} must be finite",
                self.start
            )));
        }
        debug!(steps = self.steps, seed = self.seed, "generating random walk");

        let increments = Normal::new(0.0, self.step_sd)
            .map_err(|e| Error::InvalidParameter(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(cumulative(
            increments.sample_iter(&mut rng).take(self.steps),
            self.start,
        ))
    }
}
