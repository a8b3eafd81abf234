//! Depth × duration damage tables from a simulated season.

use super::error::AgricultureError;
use super::library::{AgriculturalDamageLibrary, STANDARD_DEPTHS, STANDARD_DURATIONS};
use super::profile::ResolvedCropProfile;
use super::simulation::SimulationSummary;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One depth/duration cell of a damage table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DamageTableRow {
    /// Flood depth in feet
    pub depth_feet: f64,
    /// Flood duration in days
    pub duration_days: i32,
    /// Expected damage as a percent of crop value, 0 to 100
    pub damage_percent: f64,
    /// Expected damage in dollars for the field
    pub expected_damage_dollars: f64,
}

/// Damage scaling for a flood lasting `duration_days` against the crop's
/// average tolerance.
///
/// Floods shorter than the tolerance scale damage down to no less than 0.5;
/// longer floods scale it up to at most 1.6. A non-positive tolerance
/// leaves damage unscaled.
///
/// # Examples
///
/// ```
/// use hydroecon_models::agriculture::tolerance_factor;
///
/// assert_eq!(tolerance_factor(0.0, 7), 1.0);
/// assert_eq!(tolerance_factor(2.0, 2), 1.0);
/// assert!((tolerance_factor(2.0, 1) - 0.8).abs() < 1e-12);
/// assert_eq!(tolerance_factor(1.0, 14), 1.6);
/// ```
pub fn tolerance_factor(average_tolerance_days: f64, duration_days: i32) -> f64 {
    if average_tolerance_days <= 0.0 {
        return 1.0;
    }

    let ratio = f64::from(duration_days) / average_tolerance_days;
    if ratio < 1.0 {
        (0.6 + 0.4 * ratio).clamp(0.5, 1.0)
    } else {
        (1.0 + 0.35 * (ratio - 1.0)).clamp(1.0, 1.6)
    }
}

#[inline]
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Expected damage for every standard duration and depth.
///
/// Rows are ordered by duration, then depth. Each cell's percent is
/// `base_damage × duration_multiplier × tolerance_factor × effective_vulnerability`
/// clamped to [0, 100]; dollars apply that percent to the crop value over
/// `field_acreage` acres. Both are rounded to two decimals.
///
/// # Errors
///
/// Returns [`AgricultureError::InvalidAcreage`] unless `field_acreage` is
/// positive and finite.
pub fn damage_table(
    library: &AgriculturalDamageLibrary,
    profile: &ResolvedCropProfile<'_>,
    summary: &SimulationSummary,
    field_acreage: f64,
) -> Result<Vec<DamageTableRow>, AgricultureError> {
    if !(field_acreage > 0.0 && field_acreage.is_finite()) {
        return Err(AgricultureError::InvalidAcreage(field_acreage));
    }

    let crop = profile.profile;
    let mut rows = Vec::with_capacity(STANDARD_DURATIONS.len() * STANDARD_DEPTHS.len());

    for duration_days in STANDARD_DURATIONS {
        let multiplier = library.duration_multiplier(duration_days)
            * tolerance_factor(summary.average_tolerance_days, duration_days)
            * summary.effective_vulnerability;

        for depth_feet in STANDARD_DEPTHS {
            let percent = (crop.base_damage(depth_feet) * multiplier).clamp(0.0, 100.0);
            let dollars = percent / 100.0 * crop.value_per_acre() * field_acreage;
            rows.push(DamageTableRow {
                depth_feet,
                duration_days,
                damage_percent: round_cents(percent),
                expected_damage_dollars: round_cents(dollars),
            });
        }
    }

    Ok(rows)
}
