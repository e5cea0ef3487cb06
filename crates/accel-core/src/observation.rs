//! Missing-value model
//!
//! Host statistical environments encode a missing numeric value as a NaN
//! payload. Rather than passing that convention around implicitly, every
//! routine accepting a sample is generic over [`Observation`], which knows how
//! to tell a present value from a missing one.

/// Sentinel used for a missing `f64` observation
pub const MISSING: f64 = f64::NAN;

/// A single, possibly missing, numeric observation
pub trait Observation: Copy {
    /// The value, or `None` when the observation is missing
    fn value(self) -> Option<f64>;

    /// Whether the observation is missing
    #[inline]
    fn is_missing(self) -> bool {
        self.value().is_none()
    }
}

impl Observation for f64 {
    #[inline]
    fn value(self) -> Option<f64> {
        if self.is_nan() {
            None
        } else {
            Some(self)
        }
    }
}

impl Observation for f32 {
    #[inline]
    fn value(self) -> Option<f64> {
        if self.is_nan() {
            None
        } else {
            Some(f64::from(self))
        }
    }
}

impl Observation for Option<f64> {
    #[inline]
    fn value(self) -> Option<f64> {
        self.filter(|v| !v.is_nan())
    }
}

impl<T: Observation> Observation for &T {
    #[inline]
    fn value(self) -> Option<f64> {
        (*self).value()
    }
}

/// Count the non-missing observations in a sample
pub fn count_present<T: Observation>(sample: &[T]) -> usize {
    sample.iter().filter(|x| !x.is_missing()).count()
}
