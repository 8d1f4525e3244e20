//! # Chakra: Circular Histogram Descriptors
//!
//! Keypoint descriptors for 2D point data such as planar LiDAR scans.
//!
//! A [`CircularHistogram`] encodes how the neighbours of a keypoint are
//! distributed in angle around it. Histograms are soft-binned and
//! L1-normalized, compared with a symmetric chi-squared distance, and can be
//! rotated sector by sector to compensate for orientation differences
//! between scans.
//!
//! ## Quick Start
//!
//! ```rust
//! use chakra::{CircularHistogram, CghConfig, Point2D};
//!
//! // Neighbourhood of a keypoint, keypoint itself at index 0
//! let neighbors: Vec<Point2D> = std::iter::once(Point2D::new(1.0, 1.0))
//!     .chain((0..10).map(|i| {
//!         let p = Point2D::from_polar(0.2, i as f64 * 0.6);
//!         Point2D::new(1.0 + p.x, 1.0 + p.y)
//!     }))
//!     .collect();
//!
//! let mut desc = CircularHistogram::from_config(&CghConfig::default()).unwrap();
//! desc.compute(&neighbors, 0).unwrap();
//! assert!(desc.is_valid());
//!
//! // Compare against the same keypoint seen one sector further round
//! let turned = desc.rotated(desc.sector_width());
//! assert!(desc.distance(&turned) > 0.0);
//! ```
//!
//! ## Coordinate Frame
//!
//! Coordinates follow ROS REP-103: X-forward, Y-left, counter-clockwise
//! positive rotation. Angles are radians.
//!
//! ## Scope
//!
//! Neighbour search, keypoint detection and correspondence search are left
//! to the caller. This crate consumes an assembled neighbour set and produces
//! comparable descriptors.
//!
//! ## Architecture
//!
//! - [`core`](crate::core): Point type and angle helpers
//! - [`config`]: YAML-loadable descriptor configuration
//! - [`descriptors`]: Descriptor trait, histogram metric, [`CircularHistogram`]
//! - [`error`]: Error types

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod descriptors;
pub mod error;

pub use config::{CghConfig, ConfigLoadError};
pub use crate::core::{Point2D, TWO_PI};
pub use descriptors::{
    CircularHistogram, Descriptor, HistogramRecord, MAX_DISTANCE, SoftBinning,
    symmetric_chi_squared,
};
pub use error::{DescriptorError, Result};
