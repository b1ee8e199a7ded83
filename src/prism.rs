#![warn(missing_docs)]
//! Construction of the prism outline.
//!
//! The prism is described by three vertices in viewport coordinates:
//!   - `v0`: the [`origin`], where the white light enters the prism.
//!   - `v1`: the apex, [`SIDE_LENGTH`] away from `v0` along the entry face. Both refracting faces meet here.
//!   - `v2`: the far corner, `SIDE_LENGTH * tan(prism angle)` away from `v0`, perpendicular to the entry face.
//!
//! The entry face is tilted by the incident angle, so that the white light (always travelling
//! straight up) hits it under exactly this angle.
use log::debug;
use nalgebra::Point2;
use serde::Serialize;
use uom::si::{angle::radian, f64::Angle};

use crate::{
    error::{PrismError, PrismResult},
    viewport::{origin, INCIDENT_RAY_LENGTH, SIDE_LENGTH},
};

/// A straight line segment in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// start point
    pub start: Point2<f64>,
    /// end point
    pub end: Point2<f64>,
}
impl Segment {
    /// Creates a new [`Segment`].
    #[must_use]
    pub const fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }
    /// Returns the length of this [`Segment`].
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// The outline of the prism for a given incident angle and prism (apex) angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrismGeometry {
    vertices: [Point2<f64>; 3],
    incident_angle: Angle,
    prism_angle: Angle,
    end_length: f64,
}
impl PrismGeometry {
    /// Construct the prism outline.
    ///
    /// The angles are not range checked here; this is done by the
    /// [`PrismOpticsModel`](crate::model::PrismOpticsModel).
    ///
    /// # Errors
    ///
    /// This function will return [`PrismError::DegenerateGeometry`] if any vertex is not finite.
    pub fn new(incident_angle: Angle, prism_angle: Angle) -> PrismResult<Self> {
        let incident = incident_angle.get::<radian>();
        let end_length = SIDE_LENGTH * prism_angle.get::<radian>().tan();
        let v0 = origin();
        let v1 = Point2::new(
            v0.x - incident.cos() * SIDE_LENGTH,
            v0.y - incident.sin() * SIDE_LENGTH,
        );
        let v2 = Point2::new(
            v0.x + incident.sin() * end_length,
            v0.y - incident.cos() * end_length,
        );
        let vertices = [v0, v1, v2];
        if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(PrismError::DegenerateGeometry(
                "prism vertices are not finite".into(),
            ));
        }
        debug!("prism vertices: {v0} {v1} {v2}");
        Ok(Self {
            vertices,
            incident_angle,
            prism_angle,
            end_length,
        })
    }
    /// Returns the three vertices of the prism outline (`v0`, `v1`, `v2`).
    #[must_use]
    pub const fn vertices(&self) -> &[Point2<f64>; 3] {
        &self.vertices
    }
    /// Returns the point where the white light enters the prism (`v0`).
    #[must_use]
    pub const fn entry_point(&self) -> Point2<f64> {
        self.vertices[0]
    }
    /// Returns the incident angle of the white light.
    #[must_use]
    pub const fn incident_angle(&self) -> Angle {
        self.incident_angle
    }
    /// Returns the apex angle of the prism.
    #[must_use]
    pub const fn prism_angle(&self) -> Angle {
        self.prism_angle
    }
    /// Returns the distance from the entry point to the far corner `v2`.
    #[must_use]
    pub const fn end_length(&self) -> f64 {
        self.end_length
    }
    /// Returns the white incident ray, coming from below and ending at the entry point.
    #[must_use]
    pub fn incident_ray(&self) -> Segment {
        let entry = self.entry_point();
        Segment::new(Point2::new(entry.x, entry.y + INCIDENT_RAY_LENGTH), entry)
    }
}
