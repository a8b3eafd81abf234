//! Agricultural flood damage.
//!
//! This module provides:
//! - [`FloodRegionProfile`]: Regional flood season and growing-season shift
//! - [`CropDamageProfile`]: Crop calendar, growth stages and depth/damage curve
//! - [`ResolvedCropProfile`]: A crop calendar shifted into a region
//! - [`AgriculturalDamageLibrary`]: Built-in regions, crops and duration multipliers
//! - [`SeasonalSimulation`]: Seeded flood-season simulation over a resolved calendar
//! - [`damage_table`]: Depth × duration damage table for a simulated crop
//!
//! # Example
//!
//! ```
//! use hydroecon_models::agriculture::{AgriculturalDamageLibrary, SeasonalSimulation};
//!
//! let library = AgriculturalDamageLibrary::global();
//! let region = library.region("Northern Plains").unwrap();
//! let crop = library.crop("Spring Wheat").unwrap();
//!
//! let resolved = crop.resolve_for_region(region.growing_season_shift_days);
//! assert_eq!(resolved.planting_start_day.get(), 117);
//!
//! let summary = SeasonalSimulation::new(200).with_seed(7).run(&resolved, region).unwrap();
//! assert!(summary.probability_of_impact <= summary.flood_occurrence_rate);
//! ```

mod damage_table;
mod error;
mod library;
mod profile;
mod region;
mod simulation;

pub use damage_table::{damage_table, tolerance_factor, DamageTableRow};
pub use error::AgricultureError;
pub use library::{AgriculturalDamageLibrary, STANDARD_DEPTHS, STANDARD_DURATIONS};
pub use profile::{
    CropCalendar, CropDamageProfile, CropGrowthStage, DamageCurvePoint, ResolvedCropProfile,
    ResolvedGrowthStage,
};
pub use region::FloodRegionProfile;
pub use simulation::{SeasonalSimulation, SimulationSummary};
