//! Crop damage profiles and their regional resolution.

use hydroecon_core::math::interpolators::{ClampedLinearInterpolator, Interpolator};
use hydroecon_core::types::DayOfYear;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Depth spans narrower than this take the lower point's damage.
const MIN_DEPTH_SPAN: f64 = 1e-4;

/// A growth stage, with days counted from the start of planting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CropGrowthStage {
    /// Stage name
    pub name: String,
    /// First day of the stage, relative to planting start
    pub start_day_offset: i32,
    /// Last day of the stage, relative to planting start
    pub end_day_offset: i32,
    /// Relative sensitivity to flooding (1.0 = most vulnerable)
    pub vulnerability: f64,
    /// Days of inundation the crop tolerates in this stage
    pub flood_tolerance_days: f64,
}

impl CropGrowthStage {
    /// Creates a growth stage.
    pub fn new(
        name: impl Into<String>,
        offsets: (i32, i32),
        vulnerability: f64,
        flood_tolerance_days: f64,
    ) -> Self {
        Self {
            name: name.into(),
            start_day_offset: offsets.0,
            end_day_offset: offsets.1,
            vulnerability,
            flood_tolerance_days,
        }
    }
}

/// A point on a depth/damage curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DamageCurvePoint {
    /// Flood depth in feet
    pub depth_feet: f64,
    /// Damage as a percent of crop value
    pub damage_percent: f64,
}

impl DamageCurvePoint {
    /// Creates a curve point.
    pub fn new(depth_feet: f64, damage_percent: f64) -> Self {
        Self {
            depth_feet,
            damage_percent,
        }
    }
}

/// Planting and harvest days before any regional shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CropCalendar {
    /// First day of the planting window
    pub planting_window_start_day: i32,
    /// Last day of the planting window
    pub planting_window_end_day: i32,
    /// Last day of harvest
    pub harvest_end_day: i32,
}

/// Crop calendar, growth stages and depth/damage curve for one crop.
///
/// Immutable once built. The damage curve is sorted by depth at
/// construction; resolving against a region produces a new
/// [`ResolvedCropProfile`] and never modifies the profile, so one profile
/// can be resolved for many regions concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct CropDamageProfile {
    crop_name: String,
    occupancy_type: String,
    description: String,
    value_per_acre: f64,
    calendar: CropCalendar,
    stages: Vec<CropGrowthStage>,
    damage_curve: Option<ClampedLinearInterpolator<f64>>,
}

impl CropDamageProfile {
    /// Creates a profile. Curve points may be given in any order.
    pub fn new(
        crop_name: impl Into<String>,
        occupancy_type: impl Into<String>,
        value_per_acre: f64,
        calendar: CropCalendar,
        stages: Vec<CropGrowthStage>,
        damage_curve: &[DamageCurvePoint],
    ) -> Self {
        let depths: Vec<f64> = damage_curve.iter().map(|p| p.depth_feet).collect();
        let damages: Vec<f64> = damage_curve.iter().map(|p| p.damage_percent).collect();
        // An empty curve is the only construction failure; it means zero damage.
        let damage_curve = ClampedLinearInterpolator::with_min_span(&depths, &damages, MIN_DEPTH_SPAN).ok();

        Self {
            crop_name: crop_name.into(),
            occupancy_type: occupancy_type.into(),
            description: String::new(),
            value_per_acre,
            calendar,
            stages,
            damage_curve,
        }
    }

    /// Sets the narrative description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Crop name.
    pub fn crop_name(&self) -> &str {
        &self.crop_name
    }

    /// Occupancy type label used in damage inventories.
    pub fn occupancy_type(&self) -> &str {
        &self.occupancy_type
    }

    /// Narrative description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Crop value per acre.
    pub fn value_per_acre(&self) -> f64 {
        self.value_per_acre
    }

    /// Unshifted planting and harvest days.
    pub fn calendar(&self) -> CropCalendar {
        self.calendar
    }

    /// Growth stages in calendar order.
    pub fn stages(&self) -> &[CropGrowthStage] {
        &self.stages
    }

    /// Damage curve points sorted by depth.
    pub fn damage_curve(&self) -> Vec<DamageCurvePoint> {
        match &self.damage_curve {
            Some(curve) => curve
                .xs()
                .iter()
                .zip(curve.ys())
                .map(|(&depth, &damage)| DamageCurvePoint::new(depth, damage))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Damage percent at `depth` before duration and stage adjustments.
    ///
    /// Depths at or below the first point return its damage; at or above
    /// the last point, the last damage. Between points the damage is
    /// linearly interpolated, except across spans narrower than 1e-4 ft
    /// which return the lower point's damage. A profile without a curve
    /// returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydroecon_models::agriculture::AgriculturalDamageLibrary;
    ///
    /// let corn = AgriculturalDamageLibrary::global().crop("Corn (Grain)").unwrap();
    /// assert_eq!(corn.base_damage(2.0), 35.0);
    /// assert_eq!(corn.base_damage(2.5), 45.0);
    /// assert_eq!(corn.base_damage(0.0), 5.0);
    /// assert_eq!(corn.base_damage(12.0), 90.0);
    /// ```
    pub fn base_damage(&self, depth: f64) -> f64 {
        self.damage_curve
            .as_ref()
            .map_or(0.0, |curve| curve.interpolate(depth))
    }

    /// Shift the crop calendar by a region's growing-season offset.
    ///
    /// Planting start/end and harvest end move by `growing_season_shift_days`
    /// and are clamped to [1, 365]. Each stage starts at
    /// `clamp(planting_start + start_offset)` and ends at
    /// `min(clamp(planting_start + end_offset), harvest_end)`.
    pub fn resolve_for_region(&self, growing_season_shift_days: i32) -> ResolvedCropProfile<'_> {
        let shift = |day: i32| DayOfYear::clamped(i64::from(day) + i64::from(growing_season_shift_days));

        let planting_start_day = shift(self.calendar.planting_window_start_day);
        let planting_end_day = shift(self.calendar.planting_window_end_day);
        let harvest_end_day = shift(self.calendar.harvest_end_day);

        let stages = self
            .stages
            .iter()
            .map(|stage| ResolvedGrowthStage {
                name: stage.name.clone(),
                start_day: planting_start_day.shifted(stage.start_day_offset),
                end_day: planting_start_day.shifted(stage.end_day_offset).min(harvest_end_day),
                vulnerability: stage.vulnerability,
                flood_tolerance_days: stage.flood_tolerance_days,
            })
            .collect();

        ResolvedCropProfile {
            profile: self,
            planting_start_day,
            planting_end_day,
            harvest_end_day,
            stages,
        }
    }
}

impl fmt::Display for CropDamageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.crop_name)
    }
}

/// A growth stage placed on the calendar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedGrowthStage {
    /// Stage name
    pub name: String,
    /// First day of the stage
    pub start_day: DayOfYear,
    /// Last day of the stage, never after harvest end
    pub end_day: DayOfYear,
    /// Relative sensitivity to flooding
    pub vulnerability: f64,
    /// Days of inundation tolerated
    pub flood_tolerance_days: f64,
}

impl ResolvedGrowthStage {
    /// True if `day` falls within the stage (inclusive).
    #[inline]
    pub fn contains(&self, day: DayOfYear) -> bool {
        self.start_day <= day && day <= self.end_day
    }
}

/// A crop calendar resolved for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCropProfile<'a> {
    /// The source profile
    pub profile: &'a CropDamageProfile,
    /// Shifted first planting day
    pub planting_start_day: DayOfYear,
    /// Shifted last planting day
    pub planting_end_day: DayOfYear,
    /// Shifted last harvest day
    pub harvest_end_day: DayOfYear,
    /// Stages placed on the calendar
    pub stages: Vec<ResolvedGrowthStage>,
}

impl ResolvedCropProfile<'_> {
    /// True if `day` lies between planting start and harvest end.
    #[inline]
    pub fn in_season(&self, day: DayOfYear) -> bool {
        self.planting_start_day <= day && day <= self.harvest_end_day
    }

    /// The stage containing `day`, falling back to the last stage.
    pub fn stage_at(&self, day: DayOfYear) -> Option<(usize, &ResolvedGrowthStage)> {
        self.stages
            .iter()
            .enumerate()
            .find(|(_, stage)| stage.contains(day))
            .or_else(|| self.stages.len().checked_sub(1).map(|i| (i, &self.stages[i])))
    }
}
