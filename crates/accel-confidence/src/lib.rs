//! Bootstrap confidence intervals for the median
//!
//! Resamples a sample with replacement, takes the median of every resample
//! (ignoring missing values) and reads a percentile interval off the sorted
//! distribution of medians.
//!
//! # Examples
//!
//! ```rust
//! use accel_confidence::{Bootstrap, api::bootstrap_median_ci_seeded};
//! use accel_core::MISSING;
//!
//! let sample = vec![2.1, 3.4, MISSING, 1.9, 2.8, 3.0, 2.2];
//!
//! let ci = bootstrap_median_ci_seeded(&sample, 2000, 0.95, 42).unwrap();
//! println!("{ci}");
//!
//! let result = Bootstrap::new()
//!     .with_resamples(2000)
//!     .with_seed(42)
//!     .median_distribution(&sample)
//!     .unwrap();
//! assert_eq!(result.interval, ci);
//! ```

pub mod api;
mod bootstrap;
mod percentile;
mod types;

// Re-exports
pub use api::{
    bootstrap_median_ci, bootstrap_median_ci_seeded, bootstrap_median_ci_with_level,
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES,
};
pub use bootstrap::{stream_seed, Bootstrap, BootstrapResult, MAX_REDRAWS};
pub use percentile::PercentileBootstrap;
pub use types::{ConfidenceInterval, ConfidenceLevel};
