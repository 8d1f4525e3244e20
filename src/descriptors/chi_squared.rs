//! Histogram comparison metric.

use super::MAX_DISTANCE;

/// Denominator guard for bins that are empty in both histograms.
pub const CHI_SQUARED_EPSILON: f64 = 1e-8;

/// Symmetric chi-squared distance between two histograms.
///
/// χ² = ½ Σ (a_i - b_i)² / (a_i + b_i + ε)
///
/// - 0.0 = identical histograms
/// - 1.0 = disjoint L1-normalized histograms
///
/// Returns [`MAX_DISTANCE`] if either histogram is empty or the lengths differ.
///
/// # Example
/// ```
/// use chakra::descriptors::{MAX_DISTANCE, symmetric_chi_squared};
///
/// let a = [0.5, 0.5, 0.0];
/// assert_eq!(symmetric_chi_squared(&a, &a), 0.0);
/// assert_eq!(symmetric_chi_squared(&a, &[]), MAX_DISTANCE);
/// ```
pub fn symmetric_chi_squared(h1: &[f64], h2: &[f64]) -> f64 {
    if h1.is_empty() || h2.is_empty() || h1.len() != h2.len() {
        return MAX_DISTANCE;
    }

    let sum: f64 = h1
        .iter()
        .zip(h2)
        .map(|(&a, &b)| (a - b).powi(2) / (a + b + CHI_SQUARED_EPSILON))
        .sum();

    sum / 2.0
}
