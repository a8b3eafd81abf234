//! Numerical routines shared by the hydroecon models.
//!
//! - [`interpolators`]: Clamped piecewise-linear interpolation
//! - [`integration`]: Trapezoidal integration

pub mod integration;
pub mod interpolators;
