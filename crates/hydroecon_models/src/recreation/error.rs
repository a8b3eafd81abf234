//! Error types for recreation benefit calculations.

use thiserror::Error;

/// Unit day value table errors.
///
/// # Examples
/// ```
/// use hydroecon_models::recreation::UdvError;
///
/// assert!(UdvError::EmptyTable.to_string().contains("at least one row"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UdvError {
    /// The table has no rows.
    #[error("Unit day value table requires at least one row")]
    EmptyTable,
}
