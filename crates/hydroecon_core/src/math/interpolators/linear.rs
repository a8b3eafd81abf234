//! Clamped piecewise-linear interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Evaluate a clamped piecewise-linear curve over sorted knots.
///
/// * `x <= xs[0]` returns `ys[0]`, `x >= xs[n-1]` returns `ys[n-1]`.
/// * Otherwise the segment with `xs[i] <= x < xs[i+1]` is used, so a query
///   exactly on a knot returns that knot's ordinate without rounding.
/// * A segment narrower than `min_span` returns its lower ordinate instead
///   of dividing by a near-zero width.
///
/// Returns `None` when there are no knots or the slices differ in length.
/// A NaN query yields NaN.
/// `xs` must already be sorted ascending; this is not re-checked.
///
/// # Example
///
/// ```
/// use hydroecon_core::math::interpolators::interpolate_clamped;
///
/// let xs: [f64; 4] = [1.0, 3.0, 7.0, 14.0];
/// let ys = [0.35, 0.65, 1.0, 1.18];
/// let y = interpolate_clamped(&xs, &ys, 5.0, 0.0).unwrap();
/// assert!((y - 0.825).abs() < 1e-12);
/// assert_eq!(interpolate_clamped(&xs, &ys, 30.0, 0.0), Some(1.18));
/// ```
pub fn interpolate_clamped<T: Float>(xs: &[T], ys: &[T], x: T, min_span: T) -> Option<T> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    if x.is_nan() {
        return Some(T::nan());
    }

    let last = xs.len() - 1;
    if x <= xs[0] {
        return Some(ys[0]);
    }
    if x >= xs[last] {
        return Some(ys[last]);
    }

    // xs[0] < x < xs[last], so the partition point lies in [1, last]
    let i = xs.partition_point(|&xi| xi <= x) - 1;

    let (x0, x1) = (xs[i], xs[i + 1]);
    let (y0, y1) = (ys[i], ys[i + 1]);
    let span = x1 - x0;
    if span.abs() < min_span {
        return Some(y0);
    }

    let ratio = (x - x0) / span;
    Some(y0 + ratio * (y1 - y0))
}

/// Piecewise linear interpolator that clamps outside its knot range.
///
/// Stores sorted (x, y) knots. Data points are sorted by x-coordinate during
/// construction (stable, so duplicate abscissae keep their input order).
/// A single knot is allowed and yields a constant curve.
///
/// # Example
///
/// ```
/// use hydroecon_core::math::interpolators::{ClampedLinearInterpolator, Interpolator};
///
/// let curve = ClampedLinearInterpolator::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 2.0]).unwrap();
/// assert_eq!(curve.xs(), &[0.0, 1.0, 2.0]);
/// assert_eq!(curve.interpolate(-1.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedLinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
    /// Segments narrower than this evaluate to their lower ordinate
    min_span: T,
}

impl<T: Float> ClampedLinearInterpolator<T> {
    /// Construct an interpolator with no span guard beyond exact zero width.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::LengthMismatch)` - Mismatched slice lengths
    /// * `Err(InterpolationError::InsufficientData)` - No data points
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::with_min_span(xs, ys, T::min_positive_value())
    }

    /// Construct an interpolator whose segments narrower than `min_span`
    /// short-circuit to the lower knot's value.
    pub fn with_min_span(xs: &[T], ys: &[T], min_span: T) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (xs, ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        Ok(Self { xs, ys, min_span })
    }

    /// Returns the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values in sorted x order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the configured span guard.
    #[inline]
    pub fn min_span(&self) -> T {
        self.min_span
    }
}

impl<T: Float> Interpolator<T> for ClampedLinearInterpolator<T> {
    #[inline]
    fn interpolate(&self, x: T) -> T {
        // Construction guarantees non-empty, equal-length knots.
        interpolate_clamped(&self.xs, &self.ys, x, self.min_span).unwrap_or_else(T::nan)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
