#![warn(missing_docs)]
//! Reading and writing of scene documents.
//!
//! A scene document is a small YAML file holding the two input angles (in degrees) of the model:
//! ```yaml
//! incident_angle: 45
//! prism_angle: 60
//! ```
//! Missing values are replaced by the defaults (45° incident angle, 60° prism angle).
use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PrismError, PrismResult},
    model::{PrismOpticsModel, PrismScene},
};

/// incident angle (in degrees) used if not specified otherwise
pub const DEFAULT_INCIDENT_ANGLE: f64 = 45.0;
/// prism angle (in degrees) used if not specified otherwise
pub const DEFAULT_PRISM_ANGLE: f64 = 60.0;

const fn default_incident_angle() -> f64 {
    DEFAULT_INCIDENT_ANGLE
}
const fn default_prism_angle() -> f64 {
    DEFAULT_PRISM_ANGLE
}

/// The input parameters of a prism scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDocument {
    #[serde(default = "default_incident_angle")]
    incident_angle: f64,
    #[serde(default = "default_prism_angle")]
    prism_angle: f64,
}
impl Default for SceneDocument {
    fn default() -> Self {
        Self {
            incident_angle: DEFAULT_INCIDENT_ANGLE,
            prism_angle: DEFAULT_PRISM_ANGLE,
        }
    }
}
impl SceneDocument {
    /// Creates a new [`SceneDocument`] with the given angles (in degrees).
    ///
    /// The angles are checked when the scene is computed.
    #[must_use]
    pub const fn new(incident_angle: f64, prism_angle: f64) -> Self {
        Self {
            incident_angle,
            prism_angle,
        }
    }
    /// Create a new [`SceneDocument`] from a file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> PrismResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            PrismError::SceneDocument(format!("cannot read file {} : {}", path.display(), e))
        })?;
        let document = Self::from_string(&contents)?;
        info!("scene document {} loaded", path.display());
        Ok(document)
    }
    /// Create a new [`SceneDocument`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(document: &str) -> PrismResult<Self> {
        serde_yaml::from_str(document)
            .map_err(|e| PrismError::SceneDocument(format!("parsing of scene document failed: {e}")))
    }
    /// Write this [`SceneDocument`] to a file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization or the writing of the file failed.
    pub fn save_to_file(&self, path: &Path) -> PrismResult<()> {
        let serialized = serde_yaml::to_string(self).map_err(|e| {
            PrismError::SceneDocument(format!("serialization of scene document failed: {e}"))
        })?;
        fs::write(path, serialized).map_err(|e| {
            PrismError::SceneDocument(format!("writing file {} failed: {e}", path.display()))
        })
    }
    /// Returns the incident angle (in degrees).
    #[must_use]
    pub const fn incident_angle(&self) -> f64 {
        self.incident_angle
    }
    /// Returns the prism angle (in degrees).
    #[must_use]
    pub const fn prism_angle(&self) -> f64 {
        self.prism_angle
    }
    /// Compute the [`PrismScene`] described by this document.
    ///
    /// # Errors
    ///
    /// This function will return an error if the angles are invalid (see [`PrismOpticsModel::compute`]).
    pub fn compute(&self) -> PrismResult<PrismScene> {
        PrismOpticsModel::compute(self.incident_angle, self.prism_angle)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;
    #[test]
    fn default() {
        let document = SceneDocument::default();
        assert_eq!(document.incident_angle(), 45.0);
        assert_eq!(document.prism_angle(), 60.0);
    }
    #[test]
    fn from_string() {
        let document = SceneDocument::from_string("incident_angle: 30\nprism_angle: 50\n").unwrap();
        assert_eq!(document, SceneDocument::new(30.0, 50.0));
        let document = SceneDocument::from_string("prism_angle: 50").unwrap();
        assert_eq!(document, SceneDocument::new(45.0, 50.0));
        let document = SceneDocument::from_string("{}").unwrap();
        assert_eq!(document, SceneDocument::default());
    }
    #[test]
    fn from_string_wrong() {
        assert_matches!(
            SceneDocument::from_string("incident_angle: 30\nwavelength: 500\n"),
            Err(PrismError::SceneDocument(_))
        );
        assert!(SceneDocument::from_string("incident_angle: steep").is_err());
        assert!(SceneDocument::from_string("just some text").is_err());
    }
    #[test]
    fn from_file() {
        let document =
            SceneDocument::from_file(Path::new("./files_for_testing/CLI/scene.yaml")).unwrap();
        assert_eq!(document, SceneDocument::new(30.0, 50.0));
        assert_matches!(
            SceneDocument::from_file(Path::new("./files_for_testing/CLI/non_existing.yaml")),
            Err(PrismError::SceneDocument(_))
        );
        assert!(
            SceneDocument::from_file(Path::new("./files_for_testing/CLI/unknown_key.yaml"))
                .is_err()
        );
    }
    #[test]
    fn save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let document = SceneDocument::new(12.0, 34.0);
        document.save_to_file(file.path()).unwrap();
        assert_eq!(SceneDocument::from_file(file.path()).unwrap(), document);
    }
    #[test]
    fn compute() {
        assert!(SceneDocument::default().compute().is_ok());
        assert_matches!(
            SceneDocument::new(0.0, 60.0).compute(),
            Err(PrismError::InvalidAngle(_))
        );
        let document =
            SceneDocument::from_file(Path::new("./files_for_testing/CLI/invalid_angle.yaml"))
                .unwrap();
        assert_eq!(document.incident_angle(), DEFAULT_INCIDENT_ANGLE);
        assert_matches!(document.compute(), Err(PrismError::InvalidAngle(_)));
    }
}
