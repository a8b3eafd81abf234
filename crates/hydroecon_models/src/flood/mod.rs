//! Flood-risk metrics.
//!
//! - [`ead`]: Expected annual damage and equivalent annual damage
//! - [`EadError`]: Input contract violations

pub mod ead;
mod error;

pub use error::EadError;
