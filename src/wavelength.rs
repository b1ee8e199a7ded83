#![warn(missing_docs)]
//! The two representative wavelengths modeled by the prism.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::refractive_index::{RefrIndexConst, RefractiveIndex};

/// refractive index of crown glass for red light
pub const RED_REFRACTIVE_INDEX: f64 = 1.513;
/// refractive index of crown glass for violet light
pub const VIOLET_REFRACTIVE_INDEX: f64 = 1.532;

/// Color of a ray traced through the prism.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Wavelength {
    /// long wavelength end of the visible spectrum (least deflected)
    Red,
    /// short wavelength end of the visible spectrum (most deflected)
    Violet,
}

impl Wavelength {
    /// Returns the refractive index of the prism glass for this [`Wavelength`].
    #[must_use]
    pub const fn refractive_index(self) -> RefrIndexConst {
        match self {
            Self::Red => RefrIndexConst::new(RED_REFRACTIVE_INDEX),
            Self::Violet => RefrIndexConst::new(VIOLET_REFRACTIVE_INDEX),
        }
    }
    /// Shortcut for the plain refractive index value.
    #[must_use]
    pub fn index_value(self) -> f64 {
        self.refractive_index().get_refractive_index()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;
    #[test]
    fn indices() {
        assert_eq!(Wavelength::Red.index_value(), 1.513);
        assert_eq!(Wavelength::Violet.index_value(), 1.532);
        assert!(Wavelength::Violet.index_value() > Wavelength::Red.index_value());
    }
    #[test]
    fn iterate() {
        let colors: Vec<Wavelength> = Wavelength::iter().collect();
        assert_eq!(colors, vec![Wavelength::Red, Wavelength::Violet]);
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", Wavelength::Red), "red");
        assert_eq!(format!("{}", Wavelength::Violet), "violet");
    }
    #[test]
    fn serialize() {
        assert_eq!(
            serde_yaml::to_string(&Wavelength::Violet).unwrap().trim(),
            "violet"
        );
        let w: Wavelength = serde_yaml::from_str("red").unwrap();
        assert_eq!(w, Wavelength::Red);
    }
}
