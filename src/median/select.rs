//! Median selection kernels
//!
//! [`exact_median`] collapses a full level buffer; [`weighted_median`]
//! combines values retained at different levels, each weighted by the
//! number of inputs it stands for.

use crate::math;

/// A retained value together with the number of inputs it represents
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedValue {
    /// The value
    pub value: f64,
    /// Statistical weight, non-negative and finite
    pub weight: f64,
}

impl WeightedValue {
    /// Create a new weighted value
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Exact median of `values`, sorting the slice in place
///
/// Odd lengths return the middle element, even lengths the mean of the two
/// middle elements. Returns `None` for an empty slice.
///
/// # Example
///
/// ```
/// use remedian::median::exact_median;
///
/// assert_eq!(exact_median(&mut [3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(exact_median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(exact_median(&mut []), None);
/// ```
pub fn exact_median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.total_cmp(b));
    let middle = values.len() / 2;

    if values.len() % 2 == 0 {
        Some((values[middle - 1] + values[middle]) / 2.0)
    } else {
        Some(values[middle])
    }
}

/// Weighted median of `samples`, sorting the slice in place by value
///
/// Walks down from the total weight minus the smallest element's weight
/// until at most half of the total lies strictly above the current element.
/// If the remaining weight rounds to exactly half the total, the two
/// neighbouring values tie and their mean is returned; otherwise the lower
/// weighted median is returned. Equal values keep their input order.
///
/// Returns `None` for an empty slice.
///
/// # Example
///
/// ```
/// use remedian::median::{weighted_median, WeightedValue};
///
/// let mut samples = [
///     WeightedValue::new(7.0, 1.0),
///     WeightedValue::new(1.0, 1.0),
///     WeightedValue::new(2.0, 1.0),
///     WeightedValue::new(4.0, 1.0),
///     WeightedValue::new(10.0, 1.0),
/// ];
/// assert_eq!(weighted_median(&mut samples), Some(4.0));
/// ```
pub fn weighted_median(samples: &mut [WeightedValue]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    debug_assert!(
        samples.iter().all(|s| s.weight >= 0.0 && s.weight.is_finite()),
        "weights must be non-negative and finite"
    );

    samples.sort_by(|a, b| a.value.total_cmp(&b.value));

    let total: f64 = samples.iter().map(|s| s.weight).sum();
    let half = total / 2.0;

    let mut k = 0;
    let mut above = total - samples[0].weight;
    while above > half && k + 1 < samples.len() {
        k += 1;
        above -= samples[k].weight;
    }

    match samples.get(k + 1) {
        Some(next) if math::round(above) == half => Some((samples[k].value + next.value) / 2.0),
        _ => Some(samples[k].value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    use std::vec::Vec;

    #[cfg(not(feature = "std"))]
    extern crate alloc;
    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    fn weighted(values: &[f64], weights: &[f64]) -> Option<f64> {
        let mut samples: Vec<WeightedValue> = values
            .iter()
            .zip(weights)
            .map(|(&v, &w)| WeightedValue::new(v, w))
            .collect();
        weighted_median(&mut samples)
    }

    // ---- Exact median ----

    #[test]
    fn test_exact_median_odd() {
        assert_eq!(exact_median(&mut [1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(exact_median(&mut [9.0, -4.0, 0.0, 3.0, 1.0]), Some(1.0));
    }

    #[test]
    fn test_exact_median_even() {
        assert_eq!(exact_median(&mut [10.0, 20.0]), Some(15.0));
        assert_eq!(exact_median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_exact_median_single_and_empty() {
        assert_eq!(exact_median(&mut [42.0]), Some(42.0));
        assert_eq!(exact_median(&mut []), None);
    }

    #[test]
    fn test_exact_median_sorts_in_place() {
        let mut values = [3.0, 1.0, 2.0];
        exact_median(&mut values);
        assert_eq!(values, [1.0, 2.0, 3.0]);
    }

    // ---- Weighted median: reference vectors ----

    #[test]
    fn test_weighted_heavy_upper_values() {
        let third = 1.0 / 3.0;
        assert_eq!(
            weighted(&[7.0, 1.0, 2.0, 4.0, 10.0], &[1.0, third, third, third, 1.0]),
            Some(7.0)
        );
    }

    #[test]
    fn test_weighted_uniform_weights() {
        assert_eq!(
            weighted(&[7.0, 1.0, 2.0, 4.0, 10.0], &[1.0, 1.0, 1.0, 1.0, 1.0]),
            Some(4.0)
        );
    }

    #[test]
    fn test_weighted_tie_averages_neighbours() {
        let third = 1.0 / 3.0;
        assert_eq!(
            weighted(
                &[7.0, 1.0, 2.0, 4.0, 10.0, 15.0],
                &[1.0, third, third, third, 1.0, 1.0]
            ),
            Some(8.5)
        );
        assert_eq!(
            weighted(
                &[1.0, 2.0, 4.0, 7.0, 10.0, 15.0],
                &[third, third, third, 1.0, 1.0, 1.0]
            ),
            Some(8.5)
        );
    }

    #[test]
    fn test_weighted_zero_weight_entries() {
        assert_eq!(
            weighted(&[0.0, 10.0, 20.0, 30.0], &[30.0, 191.0, 9.0, 0.0]),
            Some(10.0)
        );
        assert_eq!(
            weighted(
                &[2.0, 0.6, 1.3, 0.3, 0.3, 1.7, 0.7, 1.7, 0.4],
                &[2.0, 2.0, 0.0, 1.0, 2.0, 2.0, 1.0, 6.0, 0.0]
            ),
            Some(1.7)
        );
    }

    #[test]
    fn test_weighted_heavy_ends() {
        assert_eq!(
            weighted(&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 1.0, 1.0, 1.0, 9.0]),
            Some(2.5)
        );
        assert_eq!(
            weighted(&[30.0, 40.0, 50.0, 60.0, 35.0], &[1.0, 3.0, 5.0, 4.0, 2.0]),
            Some(50.0)
        );
    }

    // ---- Weighted median: degenerate input ----

    #[test]
    fn test_weighted_empty() {
        assert_eq!(weighted_median(&mut []), None);
    }

    #[test]
    fn test_weighted_single() {
        assert_eq!(weighted(&[3.5], &[9.0]), Some(3.5));
    }

    #[test]
    fn test_weighted_unit_weights_match_exact_median() {
        for n in 1..=12 {
            let values: Vec<f64> = (0..n).map(|i| ((i * 7) % 13) as f64).collect();
            let weights: Vec<f64> = values.iter().map(|_| 1.0).collect();
            let mut sorted = values.clone();
            assert_eq!(
                weighted(&values, &weights),
                exact_median(&mut sorted),
                "n={}",
                n
            );
        }
    }
}
