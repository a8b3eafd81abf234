//! Error types for expected-annual-damage calculations.

use crate::finance::FinanceError;
use thiserror::Error;

/// Expected-annual-damage input errors.
///
/// These are contract violations by the caller.
///
/// # Examples
/// ```
/// use hydroecon_models::flood::EadError;
///
/// let err = EadError::ProbabilityOutOfRange { index: 2, probability: 1.5 };
/// assert!(format!("{}", err).contains("[0, 1]"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EadError {
    /// Probability and damage arrays differ in length.
    #[error("Probability and damage counts must match: {probabilities} probabilities, {damages} damages")]
    LengthMismatch {
        /// Number of probabilities
        probabilities: usize,
        /// Number of damages
        damages: usize,
    },

    /// No points were supplied.
    #[error("At least one probability/damage pair is required")]
    Empty,

    /// A probability lies outside [0, 1].
    #[error("Probability at index {index} is {probability}; probabilities must lie in [0, 1]")]
    ProbabilityOutOfRange {
        /// Position of the offending probability
        index: usize,
        /// The offending value
        probability: f64,
    },

    /// Analysis period is not positive.
    #[error("Analysis period must be positive: {0}")]
    InvalidPeriod(i32),

    /// Future damages are negative.
    #[error("Future damages cannot be negative: {0}")]
    NegativeFutureDamages(f64),

    /// Discount rate is negative.
    #[error("Discount rate cannot be negative: {0}")]
    NegativeRate(f64),

    /// Amortisation failed.
    #[error(transparent)]
    Finance(#[from] FinanceError),
}
