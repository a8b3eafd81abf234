//! Trapezoidal integration for exceedance-probability curves.

use num_traits::Float;

/// Integrate `ys` over `xs` with the trapezoidal rule, walking the points in
/// the order supplied.
///
/// ```text
/// Σ 0.5 · (y[i] + y[i+1]) · (x[i] - x[i+1])
/// ```
///
/// The sign convention suits abscissae sorted in descending order (as
/// exceedance probabilities are), giving a positive area for positive
/// ordinates. Fewer than two points integrate to zero. No monotonicity check
/// is made on either axis.
///
/// # Example
///
/// ```
/// use hydroecon_core::math::integration::trapezoid_descending;
///
/// let area: f64 = trapezoid_descending(&[1.0, 0.5, 0.0], &[0.0, 10.0, 10.0]);
/// assert!((area - 7.5).abs() < 1e-12);
/// ```
pub fn trapezoid_descending<T: Float>(xs: &[T], ys: &[T]) -> T {
    let half = T::from(0.5).unwrap_or_else(T::nan);
    xs.windows(2)
        .zip(ys.windows(2))
        .fold(T::zero(), |acc, (x, y)| acc + half * (y[0] + y[1]) * (x[0] - x[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_and_single_point() {
        assert_eq!(trapezoid_descending::<f64>(&[], &[]), 0.0);
        assert_eq!(trapezoid_descending(&[0.5], &[100.0]), 0.0);
    }

    #[test]
    fn test_constant_ordinate_gives_rectangle() {
        let area = trapezoid_descending(&[1.0, 0.6, 0.2, 0.0], &[4.0, 4.0, 4.0, 4.0]);
        assert_relative_eq!(area, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triangle() {
        let area = trapezoid_descending(&[1.0, 0.0], &[0.0, 10.0]);
        assert_relative_eq!(area, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ascending_abscissae_give_negative_area() {
        let area = trapezoid_descending(&[0.0, 1.0], &[2.0, 2.0]);
        assert_relative_eq!(area, -2.0, epsilon = 1e-12);
    }
}
