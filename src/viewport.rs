#![warn(missing_docs)]
//! Fixed constants of the (square) viewport all geometry is expressed in.
//!
//! The viewport uses screen coordinates: x grows to the right, y grows downwards. The white light
//! comes from below and strikes the first prism face at [`origin`].
use nalgebra::Point2;

/// side length of the square viewport
pub const VIEWPORT: f64 = 600.0;

/// distance from the [`origin`] to the prism corner on the left
pub const SIDE_LENGTH: f64 = VIEWPORT / 5.0;

/// length of the drawn exit ray segments
pub const EXIT_RAY_LENGTH: f64 = 200.0;

/// length of the drawn (white) incident ray segment
pub const INCIDENT_RAY_LENGTH: f64 = VIEWPORT / 3.0;

/// size of the drawing area in pixels.
///
/// Not used by the geometry. It is passed on to renderers with the
/// [`SceneReport`](crate::report::SceneReport); the [`VIEWPORT`] geometry is placed onto the canvas without scaling.
pub const CANVAS_SIZE: f64 = 1000.0;

/// The point where the white incident ray strikes the first prism face (center of the viewport).
#[must_use]
pub fn origin() -> Point2<f64> {
    Point2::new(VIEWPORT * 0.5, VIEWPORT * 0.5)
}

/// Convert an angle in degrees to radians.
#[must_use]
pub fn radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    #[test]
    fn origin_is_center() {
        assert_eq!(origin(), Point2::new(300.0, 300.0));
    }
    #[test]
    fn derived_lengths() {
        assert_relative_eq!(SIDE_LENGTH, 120.0);
        assert_relative_eq!(INCIDENT_RAY_LENGTH, 200.0);
    }
    #[test]
    fn radians_conversion() {
        assert_relative_eq!(radians(0.0), 0.0);
        assert_relative_eq!(radians(45.0), PI / 4.0);
        assert_relative_eq!(radians(180.0), PI);
        assert_relative_eq!(radians(-90.0), -PI / 2.0);
    }
}
