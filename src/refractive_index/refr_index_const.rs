//! Constant (wavelength-independant) refractive index
use super::RefractiveIndex;

/// Trivial refractive index model returning a constant value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefrIndexConst {
    refractive_index: f64,
}
impl RefrIndexConst {
    /// Create a constant model from a value known to be valid (>= 1.0 and finite) at compile time.
    pub(crate) const fn new(refractive_index: f64) -> Self {
        Self { refractive_index }
    }
}
impl RefractiveIndex for RefrIndexConst {
    fn get_refractive_index(&self) -> f64 {
        self.refractive_index
    }
}

/// Refractive index of the ambient medium around the prism (air, approximated as vacuum).
#[must_use]
pub const fn refr_index_air() -> RefrIndexConst {
    RefrIndexConst::new(1.0)
}
