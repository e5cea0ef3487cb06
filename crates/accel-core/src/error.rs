//! Error types for accelerated statistical routines
//!
//! Provides a unified error type for all accel-stats crates.

use thiserror::Error;

/// Core error type for accelerated statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for input with no usable (non-missing) values
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation}: sample has no non-missing values"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidInput(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("step_sd must be non-negative".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: step_sd must be non-negative");

        let err = Error::InvalidInput("empty sample".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty sample");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 2 samples, got 1");

        let err = Error::Computation("singular matrix".to_string());
        assert_eq!(err.to_string(), "Computation error: singular matrix");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("median");
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: median: sample has no non-missing values");

        let err = Error::invalid_confidence_level(1.0);
        assert_eq!(err.to_string(), "Invalid input: Confidence level 1 must be in (0, 1)");

        let err = Error::size_mismatch(10, 7, "residuals");
        assert_eq!(err.to_string(), "Invalid input: Size mismatch in residuals: expected 10, got 7");

        let err = Error::non_finite("design matrix");
        assert_eq!(err.to_string(), "Computation error: design matrix contains NaN or infinite values");
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_chaining() {
        fn inner() -> Result<()> {
            Err(Error::Computation("inner error".to_string()))
        }

        fn outer() -> Result<()> {
            inner().map_err(|e| Error::InvalidInput(format!("outer error: {e}")))
        }

        let err = outer().unwrap_err();
        assert!(err.to_string().contains("outer error"));
        assert!(err.to_string().contains("inner error"));
    }
}
