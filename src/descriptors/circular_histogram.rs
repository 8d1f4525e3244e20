//! Circular histogram descriptor for 2D keypoints.
//!
//! Encodes the angular distribution of a keypoint's neighbours around a
//! central point as a fixed-length, L1-normalized histogram.
//!
//! # Geometric Concept
//!
//! The full circle around the central point is split into `sector_count`
//! equal sectors, indexed from -π counter-clockwise:
//!
//! ```text
//!                 +π/2
//!                   │    (sector_count = 8, width = π/4)
//!            6      │      5
//!         ╲         │         ╱
//!      7    ╲       │       ╱    4
//!   ±π ───────────── ● ───────────── 0
//!      0    ╱       │       ╲    3
//!         ╱         │         ╲
//!            1      │      2
//!                   │
//!                 -π/2
//! ```
//!
//! Sector `i` covers `[-π + i·w, -π + (i+1)·w)`.
//!
//! # Soft Binning
//!
//! Each neighbour adds `peak` to its own sector and `spread` to both
//! adjacent sectors (wrapping around the circle), so a neighbour sitting
//! close to a sector boundary does not flip the descriptor completely:
//!
//! ```text
//!   sector:   i-1    i    i+1
//!   weight:    1     5     1        (defaults)
//! ```
//!
//! # Rotation
//!
//! Rotating the scene by θ shifts every angle by θ, which is a circular shift
//! of the histogram by `floor(θ / w)` sectors. Matching across orientations
//! is done by trying candidate rotations with [`CircularHistogram::rotated`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{Descriptor, MAX_DISTANCE, symmetric_chi_squared};
use crate::config::CghConfig;
use crate::core::{Point2D, TWO_PI, angle_between_points};
use crate::error::{DescriptorError, Result};

/// Ratios of θ to sector width this close to an integer count as whole sectors.
const ROTATION_SNAP_TOLERANCE: f64 = 1e-9;

/// Soft-binning weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoftBinning {
    /// Weight for the sector containing the neighbour.
    pub peak: f64,
    /// Weight for each of the two adjacent sectors.
    pub spread: f64,
}

impl Default for SoftBinning {
    fn default() -> Self {
        Self {
            peak: 5.0,
            spread: 1.0,
        }
    }
}

impl SoftBinning {
    /// Check that the weights keep histogram bins non-negative and finite.
    pub fn validate(&self) -> Result<()> {
        let usable = |w: f64| w.is_finite() && w >= 0.0;
        if !usable(self.peak) || !usable(self.spread) || self.peak + self.spread <= 0.0 {
            return Err(DescriptorError::InvalidSoftBinning {
                peak: self.peak,
                spread: self.spread,
            });
        }
        Ok(())
    }
}

/// Persisted form of a [`CircularHistogram`].
///
/// Sector count and width are derived from the histogram length on load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramRecord {
    /// Neighbourhood radius (meters)
    pub radius: f64,
    /// Histogram bins
    pub histogram: Vec<f64>,
}

/// Circular histogram descriptor (CGH).
///
/// A descriptor is either created empty from a configuration and filled by
/// [`compute`](Self::compute), or created directly from a stored histogram.
///
/// # Example
/// ```
/// use chakra::core::Point2D;
/// use chakra::descriptors::CircularHistogram;
///
/// let neighbors: Vec<Point2D> = (0..8)
///     .map(|i| Point2D::from_polar(0.3, i as f64 * 0.7))
///     .chain(std::iter::once(Point2D::ZERO))
///     .collect();
///
/// let mut desc = CircularHistogram::new(0.5, 16).unwrap();
/// desc.compute(&neighbors, 8).unwrap();
///
/// assert!(desc.is_valid());
/// assert!((desc.bins().iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// assert_eq!(desc.distance(&desc.clone()), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HistogramRecord", into = "HistogramRecord")]
pub struct CircularHistogram {
    radius: f64,
    sector_count: usize,
    sector_width: f64,
    histogram: Vec<f64>,
    valid: bool,
    binning: SoftBinning,
    min_neighbors: usize,
}

impl CircularHistogram {
    /// Minimum neighbour set size (central point included) for a valid descriptor.
    pub const DEFAULT_MIN_NEIGHBORS: usize = 7;

    /// Create an empty descriptor with `sector_count` sectors.
    pub fn new(radius: f64, sector_count: usize) -> Result<Self> {
        if sector_count == 0 {
            return Err(DescriptorError::ZeroSectors);
        }
        Ok(Self {
            radius,
            sector_count,
            sector_width: TWO_PI / sector_count as f64,
            histogram: Vec::new(),
            valid: false,
            binning: SoftBinning::default(),
            min_neighbors: Self::DEFAULT_MIN_NEIGHBORS,
        })
    }

    /// Create an empty descriptor from a validated configuration.
    pub fn from_config(config: &CghConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self::new(config.radius, config.sector_count)?
            .with_soft_binning(SoftBinning {
                peak: config.peak_weight,
                spread: config.spread_weight,
            })?
            .with_min_neighbors(config.min_neighbors))
    }

    /// Create a descriptor from a precomputed histogram.
    ///
    /// The sector count is the histogram length. Values are stored as given:
    /// no normalization or sign check is applied. The descriptor is not
    /// marked valid.
    pub fn from_histogram(radius: f64, histogram: Vec<f64>) -> Result<Self> {
        let mut desc = Self::new(radius, histogram.len())?;
        desc.histogram = histogram;
        Ok(desc)
    }

    /// Set the soft-binning weights used by [`compute`](Self::compute).
    ///
    /// # Errors
    /// [`DescriptorError::InvalidSoftBinning`] if a weight is negative or
    /// non-finite, or both are zero.
    pub fn with_soft_binning(mut self, binning: SoftBinning) -> Result<Self> {
        binning.validate()?;
        self.binning = binning;
        Ok(self)
    }

    /// Set the neighbour count needed for a valid descriptor.
    pub fn with_min_neighbors(mut self, min_neighbors: usize) -> Self {
        self.min_neighbors = min_neighbors;
        self
    }

    /// Rebuild the histogram from a neighbour set.
    ///
    /// `neighbors[central_index]` is the angular origin and is not binned.
    /// Every other point contributes soft-binned weight to the sector of its
    /// angle as seen from the central point; the result is L1-normalized.
    ///
    /// The descriptor is valid when the set (central point included) has at
    /// least `min_neighbors` points. If nothing was binned the histogram is
    /// left all-zero and the descriptor is invalid.
    ///
    /// # Errors
    /// [`DescriptorError::CentralIndexOutOfRange`] if `central_index` is not
    /// an index into `neighbors`. The descriptor is unchanged in that case.
    pub fn compute(&mut self, neighbors: &[Point2D], central_index: usize) -> Result<()> {
        let center = *neighbors
            .get(central_index)
            .ok_or(DescriptorError::CentralIndexOutOfRange {
                index: central_index,
                len: neighbors.len(),
            })?;

        let n = self.sector_count;
        self.valid = false;
        self.histogram.clear();
        self.histogram.resize(n, 0.0);

        for (i, point) in neighbors.iter().enumerate() {
            if i == central_index {
                continue;
            }

            if !point.is_finite() || !center.is_finite() {
                log::warn!(
                    "Skipping neighbor {} with non-finite coordinates ({:?} around {:?})",
                    i,
                    point,
                    center
                );
                continue;
            }

            let angle = angle_between_points(point, &center);

            let idx = self.sector_of(angle);
            let prev = if idx == 0 { n - 1 } else { idx - 1 };
            let next = if idx + 1 == n { 0 } else { idx + 1 };

            self.histogram[prev] += self.binning.spread;
            self.histogram[idx] += self.binning.peak;
            self.histogram[next] += self.binning.spread;
        }

        let sum: f64 = self.histogram.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            log::debug!(
                "Degenerate neighborhood ({} points, weight {}), histogram left all-zero",
                neighbors.len(),
                sum
            );
            self.histogram.fill(0.0);
            return Ok(());
        }

        for bin in &mut self.histogram {
            *bin /= sum;
        }
        self.valid = neighbors.len() >= self.min_neighbors;

        log::trace!(
            "Computed CGH over {} neighbors ({} sectors), valid={}",
            neighbors.len(),
            n,
            self.valid
        );

        Ok(())
    }

    /// Sector index covering `angle` (radians, any range).
    ///
    /// Indices wrap around the circle, so +π maps to sector 0 like -π does.
    #[inline]
    pub fn sector_of(&self, angle: f64) -> usize {
        let raw = ((angle + PI) / self.sector_width).floor() as i64;
        raw.rem_euclid(self.sector_count as i64) as usize
    }

    /// Symmetric chi-squared distance to another descriptor.
    ///
    /// Returns [`MAX_DISTANCE`] if the sector counts differ or either
    /// histogram is empty.
    pub fn distance(&self, other: &Self) -> f64 {
        if self.sector_count != other.sector_count {
            return MAX_DISTANCE;
        }
        symmetric_chi_squared(&self.histogram, &other.histogram)
    }

    /// Circularly shift the histogram by `floor(theta / sector_width)` sectors.
    ///
    /// Afterwards bin `i` holds what was in bin `(i - shift) mod sector_count`.
    /// Negative angles shift the other way; whole turns are no-ops.
    pub fn rotate(&mut self, theta: f64) {
        if self.histogram.is_empty() {
            return;
        }
        if !theta.is_finite() {
            log::warn!("Ignoring rotation by non-finite angle {}", theta);
            return;
        }

        let shift = self.rotation_shift(theta);
        self.histogram.rotate_right(shift);
    }

    /// Copy of this descriptor rotated by `theta`.
    pub fn rotated(&self, theta: f64) -> Self {
        let mut desc = self.clone();
        desc.rotate(theta);
        desc
    }

    /// Whole-sector shift for `theta`, in `[0, len)`.
    fn rotation_shift(&self, theta: f64) -> usize {
        let steps = theta / self.sector_width;
        let nearest = steps.round();
        let steps = if (steps - nearest).abs() < ROTATION_SNAP_TOLERANCE {
            nearest
        } else {
            steps.floor()
        };
        (steps as i64).rem_euclid(self.histogram.len() as i64) as usize
    }

    /// Copy of the histogram bins.
    pub fn histogram(&self) -> Vec<f64> {
        self.histogram.clone()
    }

    /// Read-only view of the histogram bins.
    #[inline]
    pub fn bins(&self) -> &[f64] {
        &self.histogram
    }

    /// Neighbourhood radius (meters).
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True if the last [`compute`](Self::compute) saw enough neighbours.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of angular sectors.
    #[inline]
    pub fn sector_count(&self) -> usize {
        self.sector_count
    }

    /// Angular width of one sector (radians).
    #[inline]
    pub fn sector_width(&self) -> f64 {
        self.sector_width
    }

    /// True until a histogram is computed or supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    /// Soft-binning weights in use.
    #[inline]
    pub fn soft_binning(&self) -> SoftBinning {
        self.binning
    }

    /// Neighbour count needed for a valid descriptor.
    #[inline]
    pub fn min_neighbors(&self) -> usize {
        self.min_neighbors
    }
}

impl Descriptor for CircularHistogram {
    fn distance(&self, other: &Self) -> f64 {
        CircularHistogram::distance(self, other)
    }

    fn rotate(&mut self, theta: f64) {
        CircularHistogram::rotate(self, theta)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<CircularHistogram> for HistogramRecord {
    fn from(desc: CircularHistogram) -> Self {
        Self {
            radius: desc.radius,
            histogram: desc.histogram,
        }
    }
}

impl TryFrom<HistogramRecord> for CircularHistogram {
    type Error = DescriptorError;

    fn try_from(record: HistogramRecord) -> Result<Self> {
        Self::from_histogram(record.radius, record.histogram)
    }
}
