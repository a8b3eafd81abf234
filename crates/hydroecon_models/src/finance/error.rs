//! Error types for finance calculations.

use thiserror::Error;

/// Finance calculation errors.
///
/// # Examples
/// ```
/// use hydroecon_models::finance::FinanceError;
///
/// let err = FinanceError::InvalidPeriods { periods: 0 };
/// assert!(format!("{}", err).contains("periods"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FinanceError {
    /// Amortisation horizon is not positive.
    #[error("Invalid number of periods: {periods} (must be positive)")]
    InvalidPeriods {
        /// The invalid period count
        periods: i32,
    },

    /// Total usable storage is not positive.
    #[error("Invalid total usable storage: {storage} (must be greater than zero)")]
    InvalidStorage {
        /// The invalid storage value
        storage: f64,
    },
}
