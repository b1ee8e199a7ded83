#![warn(missing_docs)]
//! The prism optics model: the prism outline together with the red and violet ray paths.
use std::f64::consts::FRAC_PI_2;

use log::debug;
use strum::IntoEnumIterator;
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::{
    error::{PrismError, PrismResult},
    prism::PrismGeometry,
    ray_path::{InternalChord, RayPath},
    viewport::radians,
    wavelength::Wavelength,
};

/// Pure model computing the dispersion of white light in the prism.
///
/// The model keeps no state. Every call of [`PrismOpticsModel::compute`] constructs the scene from
/// scratch, so it can be used from any number of threads at the same time.
///
/// # Example
/// ```
/// use prism_dispersion::{model::PrismOpticsModel, wavelength::Wavelength};
///
/// let scene = PrismOpticsModel::compute(45.0, 60.0).unwrap();
/// assert!(scene.ray(Wavelength::Red).is_ok());
/// assert!(scene.ray(Wavelength::Violet).is_ok());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PrismOpticsModel;

impl PrismOpticsModel {
    /// Compute the scene for the given incident angle and prism angle (both in degrees).
    ///
    /// # Errors
    ///
    /// This function will return [`PrismError::InvalidAngle`] if one of the angles is outside the interval
    /// ]0°; 90°[ or not finite. Failures of a single ray (e.g. total internal reflection) do not fail
    /// this function but are stored in the returned [`PrismScene`].
    pub fn compute(
        incident_angle_degrees: f64,
        prism_angle_degrees: f64,
    ) -> PrismResult<PrismScene> {
        check_degrees("incident angle", incident_angle_degrees)?;
        check_degrees("prism angle", prism_angle_degrees)?;
        Self::trace_scene(
            Angle::new::<radian>(radians(incident_angle_degrees)),
            Angle::new::<radian>(radians(prism_angle_degrees)),
        )
    }
    /// Compute the scene for the given incident angle and prism angle.
    ///
    /// # Errors
    ///
    /// This function will return [`PrismError::InvalidAngle`] if one of the angles is outside the interval
    /// ]0; pi/2[ or not finite.
    pub fn compute_angles(incident_angle: Angle, prism_angle: Angle) -> PrismResult<PrismScene> {
        check_radians("incident angle", incident_angle.get::<radian>())?;
        check_radians("prism angle", prism_angle.get::<radian>())?;
        Self::trace_scene(incident_angle, prism_angle)
    }
    fn trace_scene(incident_angle: Angle, prism_angle: Angle) -> PrismResult<PrismScene> {
        debug!(
            "compute prism scene: incident angle {:.3} deg, prism angle {:.3} deg",
            incident_angle.get::<degree>(),
            prism_angle.get::<degree>()
        );
        let geometry = PrismGeometry::new(incident_angle, prism_angle)?;
        let red = RayPath::trace(&geometry, Wavelength::Red);
        let violet = RayPath::trace(&geometry, Wavelength::Violet);
        Ok(PrismScene {
            geometry,
            red,
            violet,
        })
    }
}

fn invalid_angle(name: &str) -> PrismError {
    PrismError::InvalidAngle(format!(
        "{name} must be within the interval ]0 deg; 90 deg[ and finite"
    ))
}
fn check_degrees(name: &str, degrees: f64) -> PrismResult<()> {
    if degrees.is_finite() && degrees > 0.0 && degrees < 90.0 {
        Ok(())
    } else {
        Err(invalid_angle(name))
    }
}
fn check_radians(name: &str, radians: f64) -> PrismResult<()> {
    if radians.is_finite() && radians > 0.0 && radians < FRAC_PI_2 {
        Ok(())
    } else {
        Err(invalid_angle(name))
    }
}

/// The result of a [`PrismOpticsModel`] computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PrismScene {
    geometry: PrismGeometry,
    red: PrismResult<RayPath>,
    violet: PrismResult<RayPath>,
}
impl PrismScene {
    /// Returns the prism outline.
    #[must_use]
    pub const fn geometry(&self) -> &PrismGeometry {
        &self.geometry
    }
    /// Returns the path of the red ray or the reason why it could not be traced.
    #[must_use]
    pub const fn red(&self) -> &PrismResult<RayPath> {
        &self.red
    }
    /// Returns the path of the violet ray or the reason why it could not be traced.
    #[must_use]
    pub const fn violet(&self) -> &PrismResult<RayPath> {
        &self.violet
    }
    /// Returns the ray path of the given [`Wavelength`].
    #[must_use]
    pub const fn ray(&self, wavelength: Wavelength) -> &PrismResult<RayPath> {
        match wavelength {
            Wavelength::Red => &self.red,
            Wavelength::Violet => &self.violet,
        }
    }
    /// Iterate over all ray paths, ordered by [`Wavelength`].
    pub fn rays(&self) -> impl Iterator<Item = (Wavelength, &PrismResult<RayPath>)> {
        Wavelength::iter().map(|w| (w, self.ray(w)))
    }
    /// Returns the part of the ray of the given [`Wavelength`] inside the prism.
    ///
    /// This is also available if the ray is totally internally reflected at the second face.
    ///
    /// # Errors
    ///
    /// This function will return an error if the internal chord itself cannot be traced.
    pub fn internal_chord(&self, wavelength: Wavelength) -> PrismResult<InternalChord> {
        match self.ray(wavelength) {
            Ok(path) => Ok(path.internal_chord().clone()),
            Err(_) => InternalChord::trace(&self.geometry, wavelength),
        }
    }
}
