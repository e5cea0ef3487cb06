//! Percentile bootstrap interval
//!
//! Uses order statistics of the bootstrap distribution directly. For `n`
//! sorted estimates and tail probability `t = (1 - level) / 2` the bounds sit
//! at zero-based positions `ceil(n * t)` and `floor(n * (1 - t))`.

use crate::{ConfidenceInterval, ConfidenceLevel};
use accel_core::{Error, Result};
use tracing::debug;

/// Products closer than this (relative) to an integer are treated as that
/// integer before rounding
const INDEX_TOLERANCE: f64 = 1e-9;

/// Percentile bootstrap method
///
/// The simplest bootstrap method. Uses the empirical percentiles of the
/// bootstrap distribution to construct the confidence interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl PercentileBootstrap {
    /// Positions of the lower and upper bound in a sorted distribution of
    /// `n_estimates` values
    ///
    /// Both positions are clamped to `[0, n_estimates - 1]` and the lower
    /// position never exceeds the upper one.
    ///
    /// ```rust
    /// use accel_confidence::{ConfidenceLevel, PercentileBootstrap};
    ///
    /// let level = ConfidenceLevel::new(0.95).unwrap();
    /// assert_eq!(PercentileBootstrap::indices(1000, level), (25, 975));
    /// assert_eq!(PercentileBootstrap::indices(1, level), (0, 0));
    /// ```
    pub fn indices(n_estimates: usize, level: ConfidenceLevel) -> (usize, usize) {
        if n_estimates == 0 {
            return (0, 0);
        }
        let n = n_estimates as f64;
        let tail = level.tail_probability();

        let lower = snap_to_integer(n * tail).ceil();
        let upper = snap_to_integer(n * (1.0 - tail)).floor();

        // Float to usize casts saturate, so negative values land on 0
        let last = n_estimates - 1;
        let upper = (upper as usize).min(last);
        let lower = (lower as usize).min(upper);
        (lower, upper)
    }

    /// Build the interval from an ascending bootstrap distribution
    pub fn calculate_interval(
        &self,
        sorted_estimates: &[f64],
        original_estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        if sorted_estimates.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }

        let (lower_idx, upper_idx) = Self::indices(sorted_estimates.len(), level);
        debug!(
            n_estimates = sorted_estimates.len(),
            lower_idx, upper_idx, "percentile interval positions"
        );

        Ok(ConfidenceInterval::new(
            sorted_estimates[lower_idx],
            sorted_estimates[upper_idx],
            original_estimate,
            level.value(),
        ))
    }
}

fn snap_to_integer(x: f64) -> f64 {
    let nearest = x.round();
    if (x - nearest).abs() <= INDEX_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: f64) -> ConfidenceLevel {
        ConfidenceLevel::new(value).unwrap()
    }

    #[test]
    fn test_indices_absorb_rounding_error() {
        // 1 - 0.95 is slightly above 0.05 in binary floating point
        assert_eq!(PercentileBootstrap::indices(1000, level(0.95)), (25, 975));
        assert_eq!(PercentileBootstrap::indices(1000, level(0.90)), (50, 950));
        assert_eq!(PercentileBootstrap::indices(200, level(0.99)), (1, 199));
    }

    #[test]
    fn test_indices_fractional_positions() {
        // 10 * 0.25 = 2.5 -> ceil 3, 10 * 0.75 = 7.5 -> floor 7
        assert_eq!(PercentileBootstrap::indices(10, level(0.5)), (3, 7));
    }

    #[test]
    fn test_indices_clamped_for_tiny_distributions() {
        assert_eq!(PercentileBootstrap::indices(1, level(0.95)), (0, 0));
        assert_eq!(PercentileBootstrap::indices(2, level(0.95)), (1, 1));
        // ceil(3 * 0.45) = 2 would exceed floor(3 * 0.55) = 1
        assert_eq!(PercentileBootstrap::indices(3, level(0.1)), (1, 1));
        // upper position n would be out of range
        assert_eq!(PercentileBootstrap::indices(10, level(0.999)), (1, 9));
    }

    #[test]
    fn test_indices_monotone_in_level() {
        for n in [1usize, 2, 3, 7, 10, 99, 1000] {
            let mut previous = PercentileBootstrap::indices(n, level(0.01));
            for step in 2..100 {
                let current = PercentileBootstrap::indices(n, level(step as f64 / 100.0));
                assert!(current.0 <= previous.0, "lower grew for n={n} step={step}");
                assert!(current.1 >= previous.1, "upper shrank for n={n} step={step}");
                assert!(current.0 <= current.1);
                assert!(current.1 < n);
                previous = current;
            }
        }
    }

    #[test]
    fn test_percentile_interval() {
        let estimates = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let ci = PercentileBootstrap
            .calculate_interval(&estimates, 5.5, level(0.90))
            .unwrap();

        // ceil(0.5) = 1, floor(9.5) = 9
        assert_eq!(ci.lower, 2.0);
        assert_eq!(ci.upper, 10.0);
        assert_eq!(ci.estimate, 5.5);
        assert_eq!(ci.confidence_level, 0.90);
    }

    #[test]
    fn test_empty_distribution() {
        let result = PercentileBootstrap.calculate_interval(&[], 0.0, level(0.95));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
