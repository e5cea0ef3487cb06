//! Native statistical routines for a host statistical environment
//!
//! Each routine is independent:
//!
//! - [`confidence`]: percentile bootstrap confidence interval of the median
//! - [`common`]: missing-value aware mean and median
//! - [`spread`]: column means, standard deviations and coefficients of variation
//! - [`regression`]: ordinary least squares and fit metrics
//! - [`simulation`]: seeded Gaussian random walk
//!
//! # Example
//!
//! ```rust
//! use accel_stats::prelude::*;
//!
//! # fn main() -> accel_stats::common::Result<()> {
//! let sample = [1.0, 2.0, MISSING, 3.0, 4.0, 5.0];
//! let ci = Bootstrap::new()
//!     .with_resamples(1000)
//!     .with_seed(42)
//!     .median_interval(&sample)?;
//! assert!(ci.lower <= 3.0 && 3.0 <= ci.upper);
//! # Ok(())
//! # }
//! ```

pub use accel_confidence as confidence;
pub use accel_core as common;
pub use accel_regression as regression;
pub use accel_simulation as simulation;
pub use accel_spread as spread;

/// Prelude module for convenient imports
pub mod prelude {
    pub use accel_confidence::{
        bootstrap_median_ci, bootstrap_median_ci_seeded, Bootstrap, ConfidenceInterval,
        ConfidenceLevel,
    };
    pub use accel_core::prelude::*;
    pub use accel_regression::{ols, with_intercept, FitMetrics, OlsMethod};
    pub use accel_simulation::{random_walk, RandomWalk};
    pub use accel_spread::{column_summary, ColumnSummary};
}
