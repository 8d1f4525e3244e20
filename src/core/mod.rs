//! Core types for the chakra descriptor library.
//!
//! - [`Point2D`]: 2D point in meters
//! - [`math`]: angle helpers and the [`math::TWO_PI`] circle constant

pub mod math;
mod point;

pub use math::{TWO_PI, angle_between_points};
pub use point::Point2D;
