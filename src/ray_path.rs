#![warn(missing_docs)]
//! Tracing a single colored ray through the prism.
//!
//! The ray enters the prism at the [`PrismGeometry::entry_point`], is refracted towards the normal of
//! the entry face, crosses the prism along the internal chord and is refracted away from the normal
//! when leaving through the second face. The same routine is used for every [`Wavelength`]; only the
//! refractive index differs.
//!
//! All angles follow the same convention: they are measured against the (upwards pointing) normal of
//! the entry face at the entry point.
use std::f64::consts::FRAC_PI_2;

use log::{debug, warn};
use nalgebra::Point2;
use serde::Serialize;
use uom::si::{angle::radian, f64::Angle};

use crate::{
    error::{PrismError, PrismResult},
    prism::{PrismGeometry, Segment},
    radian,
    refractive_index::{refr_index_air, RefractiveIndex},
    viewport::EXIT_RAY_LENGTH,
    wavelength::Wavelength,
};

/// Refract a ray crossing the boundary between a medium with refractive index `n1` and a medium with
/// refractive index `n2` using Snell's law (`n1 * sin(theta1) = n2 * sin(theta2)`).
///
/// Returns `None` if there is no real solution (total internal reflection) or the refractive
/// indices are not usable.
#[must_use]
pub fn snell(n1: f64, n2: f64, theta1: Angle) -> Option<Angle> {
    let sin_theta2 = n1 * theta1.get::<radian>().sin() / n2;
    if (-1.0..=1.0).contains(&sin_theta2) {
        Some(radian!(sin_theta2.asin()))
    } else {
        None
    }
}

/// The part of a ray travelling inside the prism.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalChord {
    wavelength: Wavelength,
    refractive_index: f64,
    entry_point: Point2<f64>,
    internal_point: Point2<f64>,
    angle_inside: Angle,
}
impl InternalChord {
    /// Trace the ray of the given [`Wavelength`] from the entry point to the second prism face.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the ray cannot be refracted into the prism ([`PrismError::EntryRefraction`]).
    ///   - the intersection with the second face cannot be calculated ([`PrismError::DegenerateGeometry`]).
    pub fn trace(geometry: &PrismGeometry, wavelength: Wavelength) -> PrismResult<Self> {
        Self::trace_with_index(
            geometry,
            wavelength,
            wavelength.refractive_index().get_refractive_index(),
        )
    }
    fn trace_with_index(
        geometry: &PrismGeometry,
        wavelength: Wavelength,
        refractive_index: f64,
    ) -> PrismResult<Self> {
        let incident_angle = geometry.incident_angle();
        let angle_inside = snell(
            refr_index_air().get_refractive_index(),
            refractive_index,
            incident_angle,
        )
        .ok_or(PrismError::EntryRefraction(wavelength))?;
        let inside = angle_inside.get::<radian>();

        // the refracted ray and the second face, both starting below the far corner v2, drop by the
        // same amount where they meet
        let end_angle = FRAC_PI_2 - geometry.prism_angle().get::<radian>();
        let denominator = end_angle.tan() + inside.tan();
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(PrismError::DegenerateGeometry(format!(
                "{wavelength} ray does not intersect the second prism face"
            )));
        }
        let length_y = geometry.end_length() * end_angle.tan() / denominator;
        let length_inside = length_y / inside.cos();

        let deflection = incident_angle.get::<radian>() - inside;
        let entry_point = geometry.entry_point();
        let internal_point = Point2::new(
            entry_point.x + deflection.sin() * length_inside,
            entry_point.y - deflection.cos() * length_inside,
        );
        if !internal_point.x.is_finite() || !internal_point.y.is_finite() {
            return Err(PrismError::DegenerateGeometry(format!(
                "intersection point of {wavelength} ray is not finite"
            )));
        }
        debug!(
            "{wavelength} ray: angle inside {:.6} rad, hits second face at {internal_point}",
            inside
        );
        Ok(Self {
            wavelength,
            refractive_index,
            entry_point,
            internal_point,
            angle_inside,
        })
    }
    /// Returns the [`Wavelength`] of this [`InternalChord`].
    #[must_use]
    pub const fn wavelength(&self) -> Wavelength {
        self.wavelength
    }
    /// Returns the refractive index used for this [`InternalChord`].
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Returns the entry point (identical to the first prism vertex).
    #[must_use]
    pub const fn entry_point(&self) -> Point2<f64> {
        self.entry_point
    }
    /// Returns the intersection point with the second prism face.
    #[must_use]
    pub const fn internal_point(&self) -> Point2<f64> {
        self.internal_point
    }
    /// Returns the refraction angle at the entry face.
    #[must_use]
    pub const fn angle_inside(&self) -> Angle {
        self.angle_inside
    }
    /// Returns this [`InternalChord`] as [`Segment`].
    #[must_use]
    pub const fn segment(&self) -> Segment {
        Segment::new(self.entry_point, self.internal_point)
    }
}

/// A ray leaving the prism.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExitRay {
    origin: Point2<f64>,
    direction: Angle,
}
impl ExitRay {
    /// Returns the start point of this [`ExitRay`] on the second prism face.
    #[must_use]
    pub const fn origin(&self) -> Point2<f64> {
        self.origin
    }
    /// Returns the direction of this [`ExitRay`].
    ///
    /// The point at distance `l` from the origin is `origin + l * (cos(direction), sin(direction))`.
    #[must_use]
    pub const fn direction(&self) -> Angle {
        self.direction
    }
    /// Returns the point at the given distance from the origin along this [`ExitRay`].
    #[must_use]
    pub fn end_point(&self, length: f64) -> Point2<f64> {
        let direction = self.direction.get::<radian>();
        Point2::new(
            length.mul_add(direction.cos(), self.origin.x),
            length.mul_add(direction.sin(), self.origin.y),
        )
    }
    /// Returns the drawn part of this [`ExitRay`] ([`EXIT_RAY_LENGTH`] long).
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::new(self.origin, self.end_point(EXIT_RAY_LENGTH))
    }
}

/// The complete path of a colored ray through the prism.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RayPath {
    chord: InternalChord,
    incident_angle_at_exit: Angle,
    angle_outside: Angle,
    exit_ray: ExitRay,
}
impl RayPath {
    /// Trace the ray of the given [`Wavelength`] through the prism.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the internal chord cannot be traced (see [`InternalChord::trace`]).
    ///   - the ray is totally internally reflected at the second face ([`PrismError::TotalInternalReflection`]).
    pub fn trace(geometry: &PrismGeometry, wavelength: Wavelength) -> PrismResult<Self> {
        Self::leave_prism(geometry, InternalChord::trace(geometry, wavelength)?)
    }
    fn leave_prism(geometry: &PrismGeometry, chord: InternalChord) -> PrismResult<Self> {
        let wavelength = chord.wavelength();
        let incident_angle_at_exit = geometry.prism_angle() - chord.angle_inside();
        let Some(angle_outside) = snell(
            chord.refractive_index(),
            refr_index_air().get_refractive_index(),
            incident_angle_at_exit,
        ) else {
            warn!("{wavelength} ray is totally internally reflected at the second prism face");
            return Err(PrismError::TotalInternalReflection(wavelength));
        };
        let direction = geometry.incident_angle() - chord.angle_inside() - incident_angle_at_exit
            - radian!(FRAC_PI_2)
            + angle_outside;
        debug!(
            "{wavelength} ray: exit incidence {:.6} rad, exit refraction {:.6} rad, direction {:.6} rad",
            incident_angle_at_exit.get::<radian>(),
            angle_outside.get::<radian>(),
            direction.get::<radian>()
        );
        let exit_ray = ExitRay {
            origin: chord.internal_point(),
            direction,
        };
        Ok(Self {
            chord,
            incident_angle_at_exit,
            angle_outside,
            exit_ray,
        })
    }
    /// Returns the [`Wavelength`] of this [`RayPath`].
    #[must_use]
    pub const fn wavelength(&self) -> Wavelength {
        self.chord.wavelength()
    }
    /// Returns the part of this [`RayPath`] inside the prism.
    #[must_use]
    pub const fn internal_chord(&self) -> &InternalChord {
        &self.chord
    }
    /// Returns the entry point.
    #[must_use]
    pub const fn entry_point(&self) -> Point2<f64> {
        self.chord.entry_point()
    }
    /// Returns the intersection point with the second prism face.
    #[must_use]
    pub const fn internal_point(&self) -> Point2<f64> {
        self.chord.internal_point()
    }
    /// Returns the refraction angle at the entry face.
    #[must_use]
    pub const fn angle_inside(&self) -> Angle {
        self.chord.angle_inside()
    }
    /// Returns the angle of incidence on the inner side of the second face.
    #[must_use]
    pub const fn incident_angle_at_exit(&self) -> Angle {
        self.incident_angle_at_exit
    }
    /// Returns the refraction angle at the second face.
    #[must_use]
    pub const fn angle_outside(&self) -> Angle {
        self.angle_outside
    }
    /// Returns the direction of the ray after leaving the prism.
    #[must_use]
    pub const fn exit_direction(&self) -> Angle {
        self.exit_ray.direction()
    }
    /// Returns the [`ExitRay`] of this [`RayPath`].
    #[must_use]
    pub const fn exit_ray(&self) -> &ExitRay {
        &self.exit_ray
    }
    /// Returns the drawn exit segment.
    #[must_use]
    pub fn exit_segment(&self) -> Segment {
        self.exit_ray.segment()
    }
}
