//! Goodness-of-fit metrics for a fitted linear model
//!
//! All metrics are computed from observed values `y`, fitted values `ŷ` and
//! residuals `e = y - ŷ`.

use accel_core::{utils, Error, Result};
use std::fmt;

/// Error and explained-variance summary of a model fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Mean absolute percentage error, `mean(|e| / y)`
    pub mape: f64,
    /// Adjusted mean absolute percentage error, `mean(|e| / (y + ŷ))`
    pub amape: f64,
    /// Median absolute error
    pub medae: f64,
    /// Mean squared logarithmic error, `mean((ln(1 + y) - ln(1 + ŷ))²)`
    pub msle: f64,
    /// Coefficient of determination, `1 - RSS / TSS`
    pub r2: f64,
}

impl FitMetrics {
    /// Metrics from fitted values and residuals, as a model fit reports them
    ///
    /// Observed values are reconstructed as `fitted + residuals`.
    pub fn from_fitted(fitted: &[f64], residuals: &[f64]) -> Result<Self> {
        check_pair(fitted, residuals, "residuals")?;
        let observed: Vec<f64> = fitted.iter().zip(residuals).map(|(f, e)| f + e).collect();
        Ok(compute(&observed, fitted, residuals))
    }

    /// Metrics from observed and fitted values
    ///
    /// ```rust
    /// use accel_regression::FitMetrics;
    ///
    /// let m = FitMetrics::from_observed(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(m.mse, 0.0);
    /// assert_eq!(m.r2, 1.0);
    /// ```
    pub fn from_observed(observed: &[f64], fitted: &[f64]) -> Result<Self> {
        check_pair(observed, fitted, "fitted values")?;
        let residuals: Vec<f64> = observed.iter().zip(fitted).map(|(y, f)| y - f).collect();
        Ok(compute(observed, fitted, &residuals))
    }
}

impl fmt::Display for FitMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MSE={:.4} RMSE={:.4} MAE={:.4} MAPE={:.4} AMAPE={:.4} MedAE={:.4} MSLE={:.4} R2={:.4}",
            self.mse, self.rmse, self.mae, self.mape, self.amape, self.medae, self.msle, self.r2
        )
    }
}

fn check_pair(a: &[f64], b: &[f64], context: &str) -> Result<()> {
    if a.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    if a.len() != b.len() {
        return Err(Error::size_mismatch(a.len(), b.len(), context));
    }
    if a.iter().chain(b).any(|v| v.is_nan()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

fn average(values: impl Iterator<Item = f64>, n: f64) -> f64 {
    values.sum::<f64>() / n
}

/// Inputs are non-empty, equally long and NaN-free
fn compute(observed: &[f64], fitted: &[f64], residuals: &[f64]) -> FitMetrics {
    let n = observed.len() as f64;
    let abs_resid: Vec<f64> = residuals.iter().map(|e| e.abs()).collect();

    let mse = average(residuals.iter().map(|e| e * e), n);
    let mae = average(abs_resid.iter().copied(), n);
    let mape = average(abs_resid.iter().zip(observed).map(|(e, y)| e / y), n);
    let amape = average(
        abs_resid
            .iter()
            .zip(observed.iter().zip(fitted))
            .map(|(e, (y, f))| e / (y + f)),
        n,
    );
    // Non-empty and NaN-free, so the median exists
    let medae = utils::median(&abs_resid).unwrap_or(f64::NAN);
    let msle = average(
        observed
            .iter()
            .zip(fitted)
            .map(|(y, f)| (y.ln_1p() - f.ln_1p()).powi(2)),
        n,
    );

    let observed_mean = average(observed.iter().copied(), n);
    let tss: f64 = observed.iter().map(|y| (y - observed_mean).powi(2)).sum();
    let rss: f64 = residuals.iter().map(|e| e * e).sum();

    FitMetrics {
        mse,
        rmse: mse.sqrt(),
        mae,
        mape,
        amape,
        medae,
        msle,
        r2: 1.0 - rss / tss,
    }
}
