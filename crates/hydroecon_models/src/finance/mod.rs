//! Project finance calculations.
//!
//! This module provides:
//! - [`capital_recovery`]: Capital recovery (annuity) factor
//! - [`interest_during_construction`]: Financing cost accrued while building
//! - [`annualizer`]: Total annualised cost and benefit-cost ratio
//! - [`storage_cost`]: Reservoir storage reallocation cost
//! - [`FinanceError`]: Errors from finance calculations

pub mod annualizer;
pub mod capital_recovery;
mod error;
pub mod interest_during_construction;
pub mod storage_cost;

pub use annualizer::{AnnualizationResult, AnnualizerInputs, FutureCost};
pub use capital_recovery::capital_recovery_factor;
pub use error::FinanceError;
pub use interest_during_construction::{ExpenditureSchedule, PaymentTiming};
pub use storage_cost::storage_reallocation_cost;
