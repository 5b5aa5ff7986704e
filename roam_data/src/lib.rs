//! Shared data model for Roam map documents.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_map};
