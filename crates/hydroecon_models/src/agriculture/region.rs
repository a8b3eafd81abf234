//! Regional flood-season profiles.

use hydroecon_core::types::DayOfYear;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flood climatology and planting-calendar shift for a region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloodRegionProfile {
    /// Region name
    pub name: String,
    /// Narrative description of the flood drivers
    pub description: String,
    /// First day of the flood season
    pub flood_season_start_day: DayOfYear,
    /// Most likely flood day
    pub flood_season_peak_day: DayOfYear,
    /// Last day of the flood season
    pub flood_season_end_day: DayOfYear,
    /// Days added to every crop calendar date in this region
    pub growing_season_shift_days: i32,
    /// Probability that a flood occurs in a given year
    pub annual_flood_probability: f64,
}

impl FloodRegionProfile {
    /// Creates a region profile; season days are clamped to the calendar.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        season_days: (i64, i64, i64),
        growing_season_shift_days: i32,
        annual_flood_probability: f64,
    ) -> Self {
        let (start, peak, end) = season_days;
        Self {
            name: name.into(),
            description: description.into(),
            flood_season_start_day: DayOfYear::clamped(start),
            flood_season_peak_day: DayOfYear::clamped(peak),
            flood_season_end_day: DayOfYear::clamped(end),
            growing_season_shift_days,
            annual_flood_probability,
        }
    }
}

impl fmt::Display for FloodRegionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
