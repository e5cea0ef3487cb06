//! High-level API for bootstrap confidence intervals
//!
//! Thin functions over [`Bootstrap`] for the common call shapes.

use crate::{bootstrap::Bootstrap, ConfidenceInterval};
use accel_core::{Observation, Result};

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// 95% percentile bootstrap interval for the median
///
/// # Example
/// ```rust
/// use accel_confidence::api::bootstrap_median_ci;
///
/// let ci = bootstrap_median_ci(&[4.0, 4.0, 4.0], 500).unwrap();
/// assert_eq!((ci.lower, ci.upper), (4.0, 4.0));
/// ```
pub fn bootstrap_median_ci<T: Observation>(
    sample: &[T],
    n_resamples: usize,
) -> Result<ConfidenceInterval> {
    bootstrap_median_ci_with_level(sample, n_resamples, DEFAULT_CONFIDENCE_LEVEL)
}

/// Percentile bootstrap interval for the median at `confidence_level`
///
/// Uses a fresh random seed on every call.
pub fn bootstrap_median_ci_with_level<T: Observation>(
    sample: &[T],
    n_resamples: usize,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    Bootstrap::new()
        .with_resamples(n_resamples)
        .with_confidence_level(confidence_level)
        .median_interval(sample)
}

/// Reproducible percentile bootstrap interval for the median
///
/// # Example
/// ```rust
/// use accel_confidence::api::bootstrap_median_ci_seeded;
///
/// let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let a = bootstrap_median_ci_seeded(&sample, 1000, 0.95, 7).unwrap();
/// let b = bootstrap_median_ci_seeded(&sample, 1000, 0.95, 7).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn bootstrap_median_ci_seeded<T: Observation>(
    sample: &[T],
    n_resamples: usize,
    confidence_level: f64,
    seed: u64,
) -> Result<ConfidenceInterval> {
    Bootstrap::new()
        .with_resamples(n_resamples)
        .with_confidence_level(confidence_level)
        .with_seed(seed)
        .median_interval(sample)
}
