//! Descriptive statistics over luminance samples.
//!
//! All functions take `f32` samples (the precision of the pixel buffer) and
//! return `f64`. Empty input yields `0.0` rather than NaN so that degenerate
//! regions on tiny frames still produce a finite report.
//!
//! - [`mean`], [`median`], [`max`]: basic statistics
//! - [`percentile`], [`percentile_sorted`]: linear interpolation (R-7 method)
//! - [`population_std_dev`]: standard deviation with an N denominator

use std::cmp::Ordering;

/// Compute arithmetic mean.
///
/// # Example
///
/// ```
/// use screenshot_eval::stats::mean;
///
/// assert!((mean(&[1.0, 2.0, 3.0, 4.0, 5.0]) - 3.0).abs() < 0.001);
/// ```
#[must_use]
pub fn mean(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Compute median of a slice.
///
/// For even-length slices, returns the average of the two middle values.
#[must_use]
pub fn median(values: &[f32]) -> f64 {
    percentile(values, 0.5)
}

/// Largest sample, or `0.0` for an empty slice.
#[must_use]
pub fn max(values: &[f32]) -> f64 {
    values
        .iter()
        .copied()
        .reduce(f32::max)
        .map_or(0.0, f64::from)
}

/// Compute population standard deviation (N denominator).
///
/// # Example
///
/// ```
/// use screenshot_eval::stats::population_std_dev;
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_std_dev(&values) - 2.0).abs() < 0.001);
/// ```
#[must_use]
pub fn population_std_dev(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| (f64::from(v) - m).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Compute percentile using linear interpolation (R-7 method).
///
/// This is the default method used by R and NumPy.
/// The percentile `p` should be in the range 0.0 to 1.0.
///
/// # Example
///
/// ```
/// use screenshot_eval::stats::percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((percentile(&values, 0.5) - 3.0).abs() < 0.001);
/// assert!((percentile(&values, 0.25) - 2.0).abs() < 0.001);
/// ```
#[must_use]
pub fn percentile(values: &[f32], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    percentile_sorted(&sorted, p)
}

/// Percentile of an already ascending-sorted slice.
#[must_use]
pub fn percentile_sorted(sorted: &[f32], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return f64::from(sorted[0]);
    }

    let p = p.clamp(0.0, 1.0);
    let idx = p * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    let frac = idx - lower as f64;

    let lo = f64::from(sorted[lower]);
    if lower == upper {
        lo
    } else {
        lo + (f64::from(sorted[upper]) - lo) * frac
    }
}

/// Copy and sort samples ascending.
#[must_use]
pub fn sorted_copy(values: &[f32]) -> Vec<f32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile() {
        let values = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert!((percentile(&values, 0.0) - 1.0).abs() < 0.001);
        assert!((percentile(&values, 0.5) - 3.0).abs() < 0.001);
        assert!((percentile(&values, 1.0) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_percentile_interpolates() {
        // idx = 0.9 * 3 = 2.7 -> 3 + 0.7 * (4 - 3)
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&values, 0.9) - 3.7).abs() < 1e-6);
        // idx = 0.2 * 3 = 0.6 -> 1 + 0.6
        assert!((percentile(&values, 0.2) - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[5.0]), 5.0);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_population_std_dev_constant() {
        assert_eq!(population_std_dev(&[0.25; 16]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_max_and_mean_empty() {
        assert_eq!(max(&[]), 0.0);
        assert_eq!(mean(&[]), 0.0);
        assert!((max(&[0.1, 0.9, 0.3]) - 0.9).abs() < 1e-6);
    }
}
