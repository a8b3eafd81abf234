//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction

use thiserror::Error;

/// Interpolation errors.
///
/// Raised when an interpolator cannot be built from the supplied knots.
///
/// # Examples
/// ```
/// use hydroecon_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 0, need: 1 };
/// assert_eq!(format!("{}", err), "Insufficient data: got 0 points, need at least 1");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InterpolationError {
    /// Fewer knots than the interpolator requires.
    #[error("Insufficient data: got {got} points, need at least {need}")]
    InsufficientData {
        /// Number of points supplied
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissa and ordinate slices differ in length.
    #[error("Length mismatch: {xs} x-values but {ys} y-values")]
    LengthMismatch {
        /// Number of x-values
        xs: usize,
        /// Number of y-values
        ys: usize,
    },
}
