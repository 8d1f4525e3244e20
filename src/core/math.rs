//! Angle conventions for descriptor binning.
//!
//! All angles are in radians. Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up
//! - Counter-clockwise positive rotation

use std::f64::consts::PI;

use super::Point2D;

/// Two times PI (full circle in radians).
pub const TWO_PI: f64 = 2.0 * PI;

/// Signed angle of `point` as seen from `center`, in (-π, π].
///
/// Measured CCW from the +X axis. A point coincident with `center`
/// yields 0.
///
/// # Example
/// ```
/// use chakra::core::{Point2D, math::angle_between_points};
/// use std::f64::consts::PI;
///
/// let center = Point2D::new(1.0, 1.0);
/// let left = Point2D::new(0.0, 1.0);
/// assert!((angle_between_points(&left, &center) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn angle_between_points(point: &Point2D, center: &Point2D) -> f64 {
    center.angle_to(point)
}
