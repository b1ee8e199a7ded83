#![warn(missing_docs)]
//! Serializable summary of a [`PrismScene`] for renderers and other consumers.
//!
//! All angles are given in degrees, all points in viewport coordinates.
use std::{fs, path::Path};

use nalgebra::Point2;
use serde::Serialize;
use uom::si::{angle::degree, f64::Angle};

use crate::{
    error::{PrismError, PrismResult},
    model::PrismScene,
    prism::Segment,
    ray_path::RayPath,
    viewport::{CANVAS_SIZE, VIEWPORT},
    wavelength::Wavelength,
};

/// Outcome of tracing a single ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RayStatus {
    /// the ray leaves the prism through the second face
    #[serde(rename = "exits")]
    Exits,
    /// the ray ends at the second face
    #[serde(rename = "total internal reflection")]
    TotalInternalReflection,
    /// the ray could not be traced
    #[serde(rename = "failed")]
    Failed,
}

/// Report of a single ray.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RayReport {
    wavelength: Wavelength,
    refractive_index: f64,
    status: RayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    angle_inside: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    incident_angle_at_exit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    angle_outside: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    internal_chord: Option<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_segment: Option<Segment>,
}
impl RayReport {
    fn new(scene: &PrismScene, wavelength: Wavelength, ray: &PrismResult<RayPath>) -> Self {
        let mut report = Self {
            wavelength,
            refractive_index: wavelength.index_value(),
            status: RayStatus::Exits,
            error: None,
            angle_inside: None,
            incident_angle_at_exit: None,
            angle_outside: None,
            exit_direction: None,
            internal_chord: None,
            exit_segment: None,
        };
        match ray {
            Ok(path) => {
                report.angle_inside = Some(to_degrees(path.angle_inside()));
                report.incident_angle_at_exit = Some(to_degrees(path.incident_angle_at_exit()));
                report.angle_outside = Some(to_degrees(path.angle_outside()));
                report.exit_direction = Some(to_degrees(path.exit_direction()));
                report.internal_chord = Some(path.internal_chord().segment());
                report.exit_segment = Some(path.exit_segment());
            }
            Err(e) => {
                report.status = if matches!(e, PrismError::TotalInternalReflection(_)) {
                    RayStatus::TotalInternalReflection
                } else {
                    RayStatus::Failed
                };
                report.error = Some(e.to_string());
                if let Ok(chord) = scene.internal_chord(wavelength) {
                    report.angle_inside = Some(to_degrees(chord.angle_inside()));
                    report.internal_chord = Some(chord.segment());
                }
            }
        }
        report
    }
    /// Returns the [`Wavelength`] of this [`RayReport`].
    #[must_use]
    pub const fn wavelength(&self) -> Wavelength {
        self.wavelength
    }
    /// Returns the [`RayStatus`] of this [`RayReport`].
    #[must_use]
    pub const fn status(&self) -> RayStatus {
        self.status
    }
    /// Returns the internal chord (if it could be traced).
    #[must_use]
    pub const fn internal_chord(&self) -> Option<&Segment> {
        self.internal_chord.as_ref()
    }
    /// Returns the drawn exit segment (if the ray leaves the prism).
    #[must_use]
    pub const fn exit_segment(&self) -> Option<&Segment> {
        self.exit_segment.as_ref()
    }
}

/// Report of a complete [`PrismScene`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    incident_angle: f64,
    prism_angle: f64,
    viewport: f64,
    canvas_size: f64,
    triangle: [Point2<f64>; 3],
    incident_ray: Segment,
    rays: Vec<RayReport>,
}
impl From<&PrismScene> for SceneReport {
    fn from(scene: &PrismScene) -> Self {
        let geometry = scene.geometry();
        Self {
            incident_angle: to_degrees(geometry.incident_angle()),
            prism_angle: to_degrees(geometry.prism_angle()),
            viewport: VIEWPORT,
            canvas_size: CANVAS_SIZE,
            triangle: *geometry.vertices(),
            incident_ray: geometry.incident_ray(),
            rays: scene
                .rays()
                .map(|(wavelength, ray)| RayReport::new(scene, wavelength, ray))
                .collect(),
        }
    }
}
impl SceneReport {
    /// Returns the reports of the individual rays.
    #[must_use]
    pub fn rays(&self) -> &[RayReport] {
        &self.rays
    }
    /// Returns the prism outline.
    #[must_use]
    pub const fn triangle(&self) -> &[Point2<f64>; 3] {
        &self.triangle
    }
    /// Serialize this [`SceneReport`] to YAML.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization failed.
    pub fn to_yaml(&self) -> PrismResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PrismError::Other(format!("serialization of report failed: {e}")))
    }
    /// Write this [`SceneReport`] as YAML to the file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization or the writing of the file failed.
    pub fn write_to_file(&self, path: &Path) -> PrismResult<()> {
        fs::write(path, self.to_yaml()?).map_err(|e| {
            PrismError::Other(format!("writing report file {} failed: {e}", path.display()))
        })
    }
}

fn to_degrees(angle: Angle) -> f64 {
    angle.get::<degree>()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::PrismOpticsModel;
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;
    #[test]
    fn both_rays_exit() {
        let scene = PrismOpticsModel::compute(45.0, 60.0).unwrap();
        let report = SceneReport::from(&scene);
        assert_relative_eq!(report.incident_angle, 45.0, epsilon = 1e-12);
        assert_relative_eq!(report.prism_angle, 60.0, epsilon = 1e-12);
        assert_eq!(report.viewport, VIEWPORT);
        assert_eq!(report.canvas_size, 1000.0);
        assert_eq!(report.triangle()[0], Point2::new(300.0, 300.0));
        assert_eq!(report.rays().len(), 2);
        for ray in report.rays() {
            assert_eq!(ray.status(), RayStatus::Exits);
            assert!(ray.internal_chord().is_some());
            assert!(ray.exit_segment().is_some());
            assert!(ray.error.is_none());
        }
        assert_relative_eq!(
            report.rays()[0].angle_inside.unwrap(),
            0.486_295_561_228_221_9_f64.to_degrees(),
            epsilon = 1e-6
        );
    }
    #[test]
    fn reflected_ray_keeps_chord() {
        let scene = PrismOpticsModel::compute(30.0, 60.0).unwrap();
        let report = SceneReport::from(&scene);
        let red = &report.rays()[0];
        assert_eq!(red.wavelength(), Wavelength::Red);
        assert_eq!(red.status(), RayStatus::Exits);
        let violet = &report.rays()[1];
        assert_eq!(violet.wavelength(), Wavelength::Violet);
        assert_eq!(violet.status(), RayStatus::TotalInternalReflection);
        assert!(violet.internal_chord().is_some());
        assert!(violet.exit_segment().is_none());
        assert!(violet.angle_outside.is_none());
        assert_eq!(
            violet.error.as_deref(),
            Some("TotalInternalReflection:violet ray does not leave the prism")
        );
    }
    #[test]
    fn to_yaml() {
        let scene = PrismOpticsModel::compute(30.0, 60.0).unwrap();
        let yaml = SceneReport::from(&scene).to_yaml().unwrap();
        assert!(yaml.contains("viewport: 600.0"));
        assert!(yaml.contains("canvas_size: 1000.0"));
        assert!(yaml.contains("wavelength: red"));
        assert!(yaml.contains("status: exits"));
        assert!(yaml.contains("wavelength: violet"));
        assert!(yaml.contains("total internal reflection"));
        assert!(yaml.contains("exit_segment:"));
    }
    #[test]
    fn write_to_file() {
        let file = NamedTempFile::new().unwrap();
        let scene = PrismOpticsModel::compute(45.0, 60.0).unwrap();
        let report = SceneReport::from(&scene);
        report.write_to_file(file.path()).unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, report.to_yaml().unwrap());
    }
}
