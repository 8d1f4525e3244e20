//! Keypoint descriptors for 2D point neighbourhoods.
//!
//! # Contents
//!
//! - [`CircularHistogram`]: rotation-sensitive angular histogram around a keypoint
//! - [`Descriptor`]: capability shared by descriptor kinds
//! - [`symmetric_chi_squared`]: histogram metric used by [`CircularHistogram::distance`]
//!
//! # Comparing Descriptors
//!
//! Distances are lower-is-better. Pairs that cannot be compared (different
//! sector counts, an empty histogram) report [`MAX_DISTANCE`] instead of an
//! error, so bulk matching can treat them as "infinitely dissimilar".
//!
//! Descriptors only compare against their own kind: `distance` takes
//! `&Self`. Any dispatch across kinds belongs to the caller, which should
//! map cross-kind pairs to [`MAX_DISTANCE`] as well.

mod chi_squared;
mod circular_histogram;

pub use chi_squared::{CHI_SQUARED_EPSILON, symmetric_chi_squared};
pub use circular_histogram::{CircularHistogram, HistogramRecord, SoftBinning};

/// Sentinel distance for descriptors that cannot be compared.
pub const MAX_DISTANCE: f64 = f64::MAX;

/// Capability shared by keypoint descriptors.
pub trait Descriptor {
    /// Distance to another descriptor of the same kind.
    ///
    /// Returns [`MAX_DISTANCE`] when the two are not comparable.
    fn distance(&self, other: &Self) -> f64;

    /// Rotate the descriptor in place by `theta` radians.
    fn rotate(&mut self, theta: f64);

    /// Neighbourhood radius the descriptor was built for.
    fn radius(&self) -> f64;

    /// Whether the descriptor was computed from a large enough neighbourhood.
    fn is_valid(&self) -> bool;
}
