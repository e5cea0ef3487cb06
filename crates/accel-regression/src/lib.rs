//! Linear regression via matrix algebra
//!
//! - [`ols`] estimates coefficients either through the normal equations or
//!   through an SVD-based least-squares solve
//! - [`FitMetrics`] summarises how well fitted values track the response
//!
//! # Example
//!
//! ```rust
//! use accel_regression::{ols, with_intercept, OlsMethod};
//!
//! let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.9, 5.1, 7.0, 9.2, 10.8];
//! let x = with_intercept(&xs);
//!
//! let beta = ols(&y, &x, OlsMethod::LeastSquares).unwrap();
//! let metrics = beta.fit_metrics(&x, &y).unwrap();
//! assert!(metrics.r2 > 0.99);
//! ```

mod metrics;
mod ols;

pub use metrics::FitMetrics;
pub use ols::{ols, with_intercept, Coefficients, OlsMethod};
