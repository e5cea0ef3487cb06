//! Coefficient of variation per matrix column
//!
//! The standard deviation uses the one-pass identity
//! `sd = sqrt(n / (n - 1) * (mean(x^2) - mean(x)^2))`.

use accel_core::{Error, Result};
use nalgebra::DMatrix;
use tracing::debug;

/// Per-column location and spread of a matrix
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column means
    pub means: Vec<f64>,
    /// Column sample standard deviations
    pub sds: Vec<f64>,
    /// Column coefficients of variation, in percent
    pub cvs: Vec<f64>,
}

impl ColumnSummary {
    /// Number of summarised columns
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Coefficient of variation in percent
///
/// A zero mean yields an infinite or NaN value; that describes the data and
/// is not treated as an error.
#[inline]
pub fn coefficient_of_variation(sd: f64, mean: f64) -> f64 {
    100.0 * sd / mean
}

/// Means, standard deviations and coefficients of variation of every column
///
/// # Example
/// ```rust
/// use accel_spread::column_summary;
/// use nalgebra::DMatrix;
///
/// let x = DMatrix::from_column_slice(3, 2, &[1.0, 2.0, 3.0, 10.0, 10.0, 10.0]);
/// let summary = column_summary(&x).unwrap();
/// assert_eq!(summary.means, vec![2.0, 10.0]);
/// assert_eq!(summary.cvs[1], 0.0);
/// ```
pub fn column_summary(x: &DMatrix<f64>) -> Result<ColumnSummary> {
    let (n, k) = x.shape();
    if k == 0 {
        return Err(Error::InvalidInput("Matrix has no columns".to_string()));
    }
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }
    debug!(rows = n, cols = k, "summarising columns");

    let n_f = n as f64;
    let scale = n_f / (n_f - 1.0);
    let mut summary = ColumnSummary {
        means: Vec::with_capacity(k),
        sds: Vec::with_capacity(k),
        cvs: Vec::with_capacity(k),
    };

    for column in x.column_iter() {
        let (sum, sum_sq) = column
            .iter()
            .fold((0.0, 0.0), |(s, s2), &v| (s + v, s2 + v * v));
        let mean = sum / n_f;
        let mean_sq = sum_sq / n_f;
        // Rounding can push the difference slightly below zero
        let variance = (scale * (mean_sq - mean * mean)).max(0.0);
        let sd = variance.sqrt();

        summary.means.push(mean);
        summary.sds.push(sd);
        summary.cvs.push(coefficient_of_variation(sd, mean));
    }

    Ok(summary)
}

/// Column summary for data given as rows
pub fn column_summary_from_rows(rows: &[Vec<f64>]) -> Result<ColumnSummary> {
    let n = rows.len();
    let k = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().find(|r| r.len() != k) {
        return Err(Error::size_mismatch(k, bad.len(), "row length"));
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    column_summary(&DMatrix::from_row_slice(n, k, &flat))
}
