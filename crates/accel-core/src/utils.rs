//! Descriptive primitives over samples that may contain missing values

use crate::{observation::Observation, Error, Result};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Total order on `f64` placing NaN after every other value
#[inline]
pub fn total_order(a: &f64, b: &f64) -> Ordering {
    OrderedFloat(*a).cmp(&OrderedFloat(*b))
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use accel_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(total_order);
    sorted
}

/// Drop missing observations, keeping the order of the rest
///
/// ```rust
/// use accel_core::{utils::na_omit, MISSING};
///
/// assert_eq!(na_omit(&[1.0, MISSING, 3.0]), vec![1.0, 3.0]);
/// assert_eq!(na_omit(&[None, Some(2.0)]), vec![2.0]);
/// ```
pub fn na_omit<T: Observation>(sample: &[T]) -> Vec<f64> {
    sample.iter().filter_map(|x| x.value()).collect()
}

/// Arithmetic mean of the non-missing observations
///
/// Returns `InsufficientData` when nothing remains after dropping missing
/// values.
///
/// ```rust
/// use accel_core::{utils::mean, MISSING};
///
/// assert_eq!(mean(&[1.0, 2.0, MISSING, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[MISSING]).is_err());
/// ```
pub fn mean<T: Observation>(sample: &[T]) -> Result<f64> {
    let (sum, count) = sample
        .iter()
        .filter_map(|x| x.value())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    Ok(sum / count as f64)
}

/// Weighted mean computed as the inner product of values and weights
///
/// Weights are used as given; they are not normalised. Pairs whose value is
/// missing are skipped.
pub fn weighted_mean<T: Observation>(values: &[T], weights: &[f64]) -> Result<f64> {
    if values.len() != weights.len() {
        return Err(Error::size_mismatch(values.len(), weights.len(), "weights"));
    }
    let mut used = 0usize;
    let total = values
        .iter()
        .zip(weights)
        .filter_map(|(x, &w)| x.value().map(|v| v * w))
        .inspect(|_| used += 1)
        .sum::<f64>();
    if used == 0 {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    Ok(total)
}

/// Median of the non-missing observations
///
/// For an even count the two middle order statistics are averaged.
///
/// ```rust
/// use accel_core::{utils::median, MISSING};
///
/// assert_eq!(median(&[5.0, 1.0, MISSING, 3.0]).unwrap(), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median<T: Observation>(sample: &[T]) -> Result<f64> {
    let mut present = na_omit(sample);
    median_in_place(&mut present).ok_or(Error::InsufficientData {
        expected: 1,
        actual: 0,
    })
}

/// Median of a buffer that holds no missing values
///
/// Reorders `buf` using selection instead of a full sort. Returns `None` for
/// an empty buffer.
pub fn median_in_place(buf: &mut [f64]) -> Option<f64> {
    let n = buf.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    let (left, upper, _) = buf.select_nth_unstable_by(mid, total_order);
    let upper = *upper;
    if n % 2 == 1 {
        return Some(upper);
    }
    // Largest element of the left partition is the lower middle value
    let lower = left.iter().copied().max_by(total_order)?;
    // Halving the gap cannot overflow near f64::MAX
    Some(lower + (upper - lower) / 2.0)
}
