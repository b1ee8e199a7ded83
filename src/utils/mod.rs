//! Module for additional helpers (unit macros, test support)
pub mod test_helper;
pub mod uom_macros;
