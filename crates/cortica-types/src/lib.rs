//! # cortica-types
//!
//! Shared types, error types, and pipeline constants for the Cortica
//! mesh-conditioning core.
//!
//! No domain logic lives here; this is the vocabulary the other
//! Cortica crates share.

pub mod constants;
pub mod error;

pub use error::{CorticaError, CorticaResult};
