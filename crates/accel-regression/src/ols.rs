//! Ordinary least squares via matrix algebra

use crate::FitMetrics;
use accel_core::{Error, Result};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument};

/// How the least-squares system is solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OlsMethod {
    /// Invert the cross-product matrix: `β = (XᵀX)⁻¹ Xᵀy`
    NormalEquations,
    /// Solve `Xβ = y` directly through an SVD of `X`
    ///
    /// Rank-deficient designs get the minimum-norm solution.
    #[default]
    LeastSquares,
}

/// Fitted regression coefficients, one per design column
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    values: DVector<f64>,
}

impl Coefficients {
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Predictions `Xβ` for a design with matching column count
    pub fn fitted(&self, x: &DMatrix<f64>) -> Result<Vec<f64>> {
        if x.ncols() != self.values.len() {
            return Err(Error::size_mismatch(self.values.len(), x.ncols(), "design columns"));
        }
        Ok((x * &self.values).as_slice().to_vec())
    }

    /// Residuals `y - Xβ`
    pub fn residuals(&self, x: &DMatrix<f64>, y: &[f64]) -> Result<Vec<f64>> {
        let fitted = self.fitted(x)?;
        if fitted.len() != y.len() {
            return Err(Error::size_mismatch(fitted.len(), y.len(), "response"));
        }
        Ok(y.iter().zip(&fitted).map(|(obs, fit)| obs - fit).collect())
    }

    /// Fit metrics of these coefficients on `(x, y)`
    pub fn fit_metrics(&self, x: &DMatrix<f64>, y: &[f64]) -> Result<FitMetrics> {
        let fitted = self.fitted(x)?;
        FitMetrics::from_observed(y, &fitted)
    }
}

impl From<Coefficients> for Vec<f64> {
    fn from(c: Coefficients) -> Self {
        c.values.as_slice().to_vec()
    }
}

/// Prepend a column of ones to a single regressor
///
/// ```rust
/// use accel_regression::with_intercept;
///
/// let x = with_intercept(&[3.0, 5.0]);
/// assert_eq!(x.shape(), (2, 2));
/// assert_eq!(x[(1, 0)], 1.0);
/// assert_eq!(x[(1, 1)], 5.0);
/// ```
pub fn with_intercept(x: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(x.len(), 2, |i, j| if j == 0 { 1.0 } else { x[i] })
}

/// Fit `y ≈ Xβ` by ordinary least squares
///
/// # Example
/// ```rust
/// use accel_regression::{ols, with_intercept, OlsMethod};
///
/// let x = with_intercept(&[0.0, 1.0, 2.0, 3.0]);
/// let y = [1.0, 3.0, 5.0, 7.0];
/// let beta = ols(&y, &x, OlsMethod::NormalEquations).unwrap();
/// assert!((beta.as_slice()[0] - 1.0).abs() < 1e-9);
/// assert!((beta.as_slice()[1] - 2.0).abs() < 1e-9);
/// ```
#[instrument(skip(y, x), fields(rows = x.nrows(), cols = x.ncols()))]
pub fn ols(y: &[f64], x: &DMatrix<f64>, method: OlsMethod) -> Result<Coefficients> {
    let (n, k) = x.shape();
    if n == 0 || k == 0 {
        return Err(Error::InvalidInput("Empty design matrix".to_string()));
    }
    if y.len() != n {
        return Err(Error::size_mismatch(n, y.len(), "response"));
    }
    if n < k {
        return Err(Error::InsufficientData {
            expected: k,
            actual: n,
        });
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(Error::non_finite("regression input"));
    }

    let y = DVector::from_column_slice(y);
    let values = match method {
        OlsMethod::NormalEquations => {
            let xt = x.transpose();
            let inverse = (&xt * x).try_inverse().ok_or_else(|| {
                Error::Computation("Cross-product matrix is singular".to_string())
            })?;
            inverse * xt * y
        }
        OlsMethod::LeastSquares => {
            let svd = x.clone().svd(true, true);
            let largest = svd.singular_values.max();
            let eps = largest * 1e-12;
            let rank = svd.rank(eps);
            if rank < k {
                debug!(rank, "rank-deficient design, returning minimum-norm solution");
            }
            svd.solve(&y, eps)
                .map_err(|e| Error::Computation(format!("SVD solve failed: {e}")))?
        }
    };

    Ok(Coefficients { values })
}
