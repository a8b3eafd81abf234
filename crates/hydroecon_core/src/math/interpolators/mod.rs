//! Interpolation methods for tabulated response curves.
//!
//! Every table in the hydroecon models (depth/damage curves, flood-duration
//! multipliers, recreation unit-day values) is evaluated the same way:
//! linear between bracketing knots and flat beyond the first and last knot.
//!
//! ## Available Interpolators
//!
//! - [`ClampedLinearInterpolator`]: Owned, sorted knots with a span guard
//! - [`interpolate_clamped`]: The same rule over caller-held sorted slices
//!
//! ## Core Trait
//!
//! 1D interpolators implement [`Interpolator`]:
//! - `interpolate(x: T) -> T`: Compute the interpolated value
//! - `domain() -> (T, T)`: Return the knot range
//!
//! ## Example
//!
//! ```
//! use hydroecon_core::math::interpolators::{ClampedLinearInterpolator, Interpolator};
//!
//! let xs: [f64; 3] = [0.5, 1.0, 2.0];
//! let ys = [5.0, 15.0, 35.0];
//!
//! let curve = ClampedLinearInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(curve.domain(), (0.5, 2.0));
//! assert!((curve.interpolate(1.5) - 25.0).abs() < 1e-12);
//! assert_eq!(curve.interpolate(0.0), 5.0);
//! ```

mod linear;
mod traits;

pub use linear::{interpolate_clamped, ClampedLinearInterpolator};
pub use traits::Interpolator;
