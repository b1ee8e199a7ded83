#![warn(missing_docs)]
//! Error structures of the prism model
use std::{error::Error, fmt::Display};

use crate::wavelength::Wavelength;

/// Result type used throughout this crate
pub type PrismResult<T> = std::result::Result<T, PrismError>;

/// Errors that can be returned by the prism model and its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrismError {
    /// an input angle is outside ]0°; 90°[ or not finite
    InvalidAngle(String),
    /// the ray of the given color cannot leave the prism through its second face
    TotalInternalReflection(Wavelength),
    /// Snell's law at the entry face has no real solution for the given color
    EntryRefraction(Wavelength),
    /// the triangle or the internal chord cannot be constructed (division by zero, non-finite values)
    DegenerateGeometry(String),
    /// errors while reading or parsing a scene document
    SceneDocument(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for PrismError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAngle(m) => write!(f, "InvalidAngle:{m}"),
            Self::TotalInternalReflection(w) => {
                write!(f, "TotalInternalReflection:{w} ray does not leave the prism")
            }
            Self::EntryRefraction(w) => {
                write!(f, "EntryRefraction:{w} ray cannot enter the prism")
            }
            Self::DegenerateGeometry(m) => write!(f, "DegenerateGeometry:{m}"),
            Self::SceneDocument(m) => write!(f, "SceneDocument:{m}"),
            Self::Console(m) => write!(f, "Console:{m}"),
            Self::Other(m) => write!(f, "Prism Error:Other:{m}"),
        }
    }
}
impl Error for PrismError {}

impl std::convert::From<String> for PrismError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
