//! Core types for hydroecon.
//!
//! This module provides:
//! - [`DayOfYear`]: Calendar day clamped to [1, 365]
//! - [`InterpolationError`]: Errors from interpolator construction

pub mod day_of_year;
pub mod error;

pub use day_of_year::DayOfYear;
pub use error::InterpolationError;
