//! Shared data model for the Mystery House engine.
//!
//! Defines the world-definition types consumed by `mystery_engine` at
//! startup, the canonical authored map, and validation of a definition's
//! cross-references and item seeding.

mod defs;
mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_world};
