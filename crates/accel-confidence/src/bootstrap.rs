//! Bootstrap confidence intervals for the median
//!
//! This module provides the resampling engine:
//! - Resamples are drawn with replacement from the full sample, missing
//!   values included, and missing values are dropped before each median
//! - Every resample owns an RNG stream derived from a base seed, so the
//!   result does not depend on evaluation order
//! - Callers who already own a generator can drive a single stream instead

use crate::{percentile::PercentileBootstrap, ConfidenceInterval, ConfidenceLevel};
use accel_core::{utils, Error, Observation, Result};
use rand::prelude::*;
use tracing::{debug, instrument};

/// Consecutive all-missing resamples tolerated before giving up
pub const MAX_REDRAWS: usize = 1_000;

/// Derive the seed of resample `counter` from a base seed (SplitMix64)
///
/// Mixing rather than adding keeps neighbouring streams uncorrelated.
#[inline]
pub fn stream_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Result of a bootstrap run, including the full median distribution
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The confidence interval
    pub interval: ConfidenceInterval,
    /// Number of bootstrap resamples performed
    pub n_resamples: usize,
    /// Bootstrap medians in ascending order
    pub medians: Vec<f64>,
    /// Position of the lower bound in `medians`
    pub lower_index: usize,
    /// Position of the upper bound in `medians`
    pub upper_index: usize,
}

/// Bootstrap estimator for a percentile confidence interval of the median
///
/// Configuration is validated when the estimator runs, so an invalid setting
/// surfaces as `Error::InvalidInput` from the call rather than a panic.
///
/// ```rust
/// use accel_confidence::Bootstrap;
///
/// let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let ci = Bootstrap::new()
///     .with_resamples(1000)
///     .with_confidence_level(0.95)
///     .with_seed(42)
///     .median_interval(&sample)
///     .unwrap();
/// assert!(ci.lower <= ci.upper);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bootstrap {
    n_resamples: usize,
    confidence_level: f64,
    seed: Option<u64>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    /// Create a new bootstrap estimator with default settings
    pub fn new() -> Self {
        Self {
            n_resamples: crate::api::DEFAULT_RESAMPLES,
            confidence_level: crate::api::DEFAULT_CONFIDENCE_LEVEL,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Percentile confidence interval for the median of `sample`
    pub fn median_interval<T: Observation>(&self, sample: &[T]) -> Result<ConfidenceInterval> {
        self.median_distribution(sample).map(|r| r.interval)
    }

    /// Run the bootstrap and keep the sorted median distribution
    #[instrument(skip(self, sample), fields(n = sample.len(), n_resamples = self.n_resamples))]
    pub fn median_distribution<T: Observation>(&self, sample: &[T]) -> Result<BootstrapResult> {
        let (level, values, estimate) = self.prepare(sample)?;

        let base_seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!(base_seed, "drawing {} seeded resamples", self.n_resamples);
        let medians = seeded_medians(&values, self.n_resamples, base_seed)?;

        self.finish(medians, estimate, level)
    }

    /// Same as [`Bootstrap::median_interval`] but draws every resample from
    /// the caller's generator, ignoring any configured seed
    pub fn median_interval_with_rng<T, R>(
        &self,
        sample: &[T],
        rng: &mut R,
    ) -> Result<ConfidenceInterval>
    where
        T: Observation,
        R: Rng + ?Sized,
    {
        let (level, values, estimate) = self.prepare(sample)?;

        let mut buffer = Vec::with_capacity(values.len());
        let medians = (0..self.n_resamples)
            .map(|_| resample_median(&values, &mut *rng, &mut buffer))
            .collect::<Result<Vec<_>>>()?;

        self.finish(medians, estimate, level).map(|r| r.interval)
    }

    /// Validate configuration and input, returning the level, the sample as
    /// options and the median of the original sample
    fn prepare<T: Observation>(
        &self,
        sample: &[T],
    ) -> Result<(ConfidenceLevel, Vec<Option<f64>>, f64)> {
        if self.n_resamples == 0 {
            return Err(Error::InvalidInput(
                "Number of resamples must be positive".to_string(),
            ));
        }
        let level = ConfidenceLevel::new(self.confidence_level)?;
        if sample.is_empty() {
            return Err(Error::InvalidInput("Empty sample".to_string()));
        }

        let values: Vec<Option<f64>> = sample.iter().map(|x| x.value()).collect();
        // Opposite infinities in one resample would give a NaN median
        if let Some(bad) = values.iter().flatten().find(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "Sample contains a non-finite value ({bad})"
            )));
        }
        let estimate = utils::median(&values).map_err(|_| Error::empty_input("bootstrap median"))?;
        Ok((level, values, estimate))
    }

    fn finish(
        &self,
        mut medians: Vec<f64>,
        estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<BootstrapResult> {
        medians.sort_unstable_by(utils::total_order);

        let (lower_index, upper_index) = PercentileBootstrap::indices(medians.len(), level);
        let interval = PercentileBootstrap.calculate_interval(&medians, estimate, level)?;
        debug!(
            lower = interval.lower,
            upper = interval.upper,
            "bootstrap completed"
        );

        Ok(BootstrapResult {
            interval,
            n_resamples: self.n_resamples,
            medians,
            lower_index,
            upper_index,
        })
    }
}

/// Draw one resample of `values.len()` elements and return its median
///
/// `buffer` is reused across calls to avoid an allocation per resample.
fn resample_median<R: Rng + ?Sized>(
    values: &[Option<f64>],
    rng: &mut R,
    buffer: &mut Vec<f64>,
) -> Result<f64> {
    let n = values.len();
    for _ in 0..MAX_REDRAWS {
        buffer.clear();
        buffer.extend((0..n).filter_map(|_| values[rng.gen_range(0..n)]));
        if let Some(median) = utils::median_in_place(buffer) {
            return Ok(median);
        }
    }
    Err(Error::Computation(format!(
        "{MAX_REDRAWS} consecutive resamples contained only missing values"
    )))
}

#[cfg(not(feature = "parallel"))]
fn seeded_medians(values: &[Option<f64>], n_resamples: usize, base_seed: u64) -> Result<Vec<f64>> {
    let mut buffer = Vec::with_capacity(values.len());
    (0..n_resamples)
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(stream_seed(base_seed, i as u64));
            resample_median(values, &mut rng, &mut buffer)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn seeded_medians(values: &[Option<f64>], n_resamples: usize, base_seed: u64) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    (0..n_resamples)
        .into_par_iter()
        .map_init(
            || Vec::with_capacity(values.len()),
            |buffer, i| {
                let mut rng = StdRng::seed_from_u64(stream_seed(base_seed, i as u64));
                resample_median(values, &mut rng, buffer)
            },
        )
        .collect()
}
