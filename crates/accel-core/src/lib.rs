//! Core types for accelerated statistical routines
//!
//! Every crate in the workspace shares the error type defined here and the
//! [`Observation`] abstraction used to model missing values.
//!
//! # Example
//!
//! ```rust
//! use accel_core::{utils, MISSING};
//!
//! let sample = [2.0, MISSING, 4.0, 9.0];
//! assert_eq!(utils::mean(&sample).unwrap(), 5.0);
//! assert_eq!(utils::median(&sample).unwrap(), 4.0);
//! ```

pub mod error;
pub mod observation;
pub mod utils;

pub use error::{Error, Result};
pub use observation::{count_present, Observation, MISSING};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::observation::{Observation, MISSING};
    pub use crate::utils::{mean, median, na_omit};
}
