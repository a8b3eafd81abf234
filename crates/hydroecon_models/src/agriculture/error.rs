//! Error types for agricultural damage calculations.

use thiserror::Error;

/// Agricultural damage errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AgricultureError {
    /// Flood season days do not satisfy start <= peak <= end.
    #[error("Invalid flood season for {region}: start {start}, peak {peak}, end {end}")]
    InvalidFloodSeason {
        /// Region name
        region: String,
        /// Season start day
        start: u16,
        /// Season peak day
        peak: u16,
        /// Season end day
        end: u16,
    },

    /// Simulation needs at least one season.
    #[error("Simulation requires at least one year")]
    NoSimulationYears,

    /// Field acreage is not positive.
    #[error("Invalid field acreage: {0} (must be positive)")]
    InvalidAcreage(f64),
}
