//! Module for handling the refractive index of the prism material.
#![warn(missing_docs)]
pub mod refr_index_const;

pub use refr_index_const::{refr_index_air, RefrIndexConst};

/// All refractive index models must implement this trait.
pub trait RefractiveIndex {
    /// Get the refractive index value of the model.
    fn get_refractive_index(&self) -> f64;
}
