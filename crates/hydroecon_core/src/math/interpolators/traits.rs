//! Interpolator trait definition.

use num_traits::Float;

/// One-dimensional interpolation over a fixed set of knots.
///
/// Implementations are total: every finite `x` yields a value, with points
/// outside [`domain`](Interpolator::domain) clamped to the nearest endpoint.
pub trait Interpolator<T: Float> {
    /// Evaluate the interpolant at `x`.
    fn interpolate(&self, x: T) -> T;

    /// Return the `(x_min, x_max)` range covered by the knots.
    fn domain(&self) -> (T, T);
}
