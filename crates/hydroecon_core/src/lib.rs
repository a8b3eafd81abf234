//! # hydroecon_core: Numerical Foundation for Water-Resource Economics
//!
//! ## Layer 1 (Foundation) Role
//!
//! hydroecon_core is the bottom layer of the workspace, providing:
//! - Clamped piecewise-linear interpolation (`math::interpolators`)
//! - Trapezoidal integration over descending abscissae (`math::integration`)
//! - Day-of-year arithmetic clamped to a 365-day calendar (`types::day_of_year`)
//! - Error types: `InterpolationError` (`types::error`)
//! - Engine configuration loading (`config`)
//! - Tracing subscriber initialisation (`telemetry`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other hydroecon_* crates. External crates
//! are limited to:
//! - num-traits: Generic floating-point arithmetic
//! - thiserror: Structured error types
//! - serde / toml: Configuration files
//! - tracing / tracing-subscriber: Structured logging
//!
//! ## Usage Examples
//!
//! ```rust
//! use hydroecon_core::math::interpolators::{ClampedLinearInterpolator, Interpolator};
//! use hydroecon_core::types::DayOfYear;
//!
//! let curve = ClampedLinearInterpolator::new(&[1.0, 2.0], &[10.0, 30.0]).unwrap();
//! assert_eq!(curve.interpolate(1.5), 20.0);
//! assert_eq!(curve.interpolate(9.0), 30.0);
//!
//! let day = DayOfYear::clamped(400);
//! assert_eq!(day.get(), 365);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod math;
pub mod telemetry;
pub mod types;
