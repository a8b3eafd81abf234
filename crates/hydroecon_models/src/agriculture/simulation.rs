//! Seeded flood-season simulation over a resolved crop calendar.
//!
//! Each simulated year draws whether a flood occurs from the region's annual
//! probability and, if so, the flood day from a triangular distribution over
//! the region's flood season. Floods that land between planting start and
//! harvest end are charged to the growth stage in progress.

use super::error::AgricultureError;
use super::profile::ResolvedCropProfile;
use super::region::FloodRegionProfile;
use hydroecon_core::config::SimulationSettings;
use hydroecon_core::types::DayOfYear;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Triangular};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stage reported when the crop has no growth stages.
const FALLBACK_STAGE: &str = "growing season";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seeded generator for season draws.
struct SeasonRng {
    inner: StdRng,
}

impl SeasonRng {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform value in [0, 1).
    #[inline]
    fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    #[inline]
    fn sample<D: Distribution<f64>>(&mut self, distribution: &D) -> f64 {
        distribution.sample(&mut self.inner)
    }
}

/// Stable FNV-1a hash of the crop and region names.
fn name_seed(crop_name: &str, region_name: &str) -> u64 {
    crop_name
        .bytes()
        .chain(std::iter::once(0))
        .chain(region_name.bytes())
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

/// Calendar day for a sampled flood time, rounding halves to even.
#[inline]
fn flood_day(sample: f64) -> DayOfYear {
    DayOfYear::clamped(sample.round_ties_even() as i64)
}

/// Flood-season simulation settings.
///
/// # Examples
///
/// ```
/// use hydroecon_models::agriculture::{AgriculturalDamageLibrary, SeasonalSimulation};
///
/// let library = AgriculturalDamageLibrary::global();
/// let region = library.region("Lower Mississippi & Gulf").unwrap();
/// let resolved = library.crop("Rice").unwrap().resolve_for_region(region.growing_season_shift_days);
///
/// let first = SeasonalSimulation::new(500).run(&resolved, region).unwrap();
/// let second = SeasonalSimulation::new(500).run(&resolved, region).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalSimulation {
    years: u32,
    seed: Option<u64>,
}

impl SeasonalSimulation {
    /// Simulates `years` seasons with a seed derived from the crop and region.
    pub fn new(years: u32) -> Self {
        Self { years, seed: None }
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds a simulation from engine configuration.
    pub fn from_config(settings: &SimulationSettings) -> Self {
        Self {
            years: settings.years,
            seed: settings.seed,
        }
    }

    /// Number of simulated seasons.
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Fixed seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs the simulation for `profile` in `region`.
    ///
    /// # Errors
    ///
    /// - [`AgricultureError::NoSimulationYears`] if `years` is zero
    /// - [`AgricultureError::InvalidFloodSeason`] if the region's season is
    ///   not ordered start <= peak <= end
    pub fn run(
        &self,
        profile: &ResolvedCropProfile<'_>,
        region: &FloodRegionProfile,
    ) -> Result<SimulationSummary, AgricultureError> {
        if self.years == 0 {
            return Err(AgricultureError::NoSimulationYears);
        }

        let start = region.flood_season_start_day;
        let peak = region.flood_season_peak_day;
        let end = region.flood_season_end_day;
        let invalid_season = || AgricultureError::InvalidFloodSeason {
            region: region.name.clone(),
            start: start.get(),
            peak: peak.get(),
            end: end.get(),
        };
        if !(start <= peak && peak <= end) {
            return Err(invalid_season());
        }

        let flood_day = if start < end {
            Some(
                Triangular::new(f64::from(start.get()), f64::from(end.get()), f64::from(peak.get()))
                    .map_err(|_| invalid_season())?,
            )
        } else {
            None
        };

        let seed = self
            .seed
            .unwrap_or_else(|| name_seed(profile.profile.crop_name(), &region.name));
        let mut rng = SeasonRng::from_seed(seed);

        let mut flood_years = 0u32;
        let mut impact_years = 0u32;
        let mut vulnerability_sum = 0.0;
        let mut tolerance_weighted = 0.0;
        let mut stage_hits = vec![0u32; profile.stages.len()];

        for _ in 0..self.years {
            if rng.gen_uniform() > region.annual_flood_probability {
                continue;
            }
            flood_years += 1;

            let day = match &flood_day {
                Some(distribution) => self::flood_day(rng.sample(distribution)),
                None => start,
            };
            if !profile.in_season(day) {
                continue;
            }

            impact_years += 1;
            if let Some((index, stage)) = profile.stage_at(day) {
                vulnerability_sum += stage.vulnerability;
                tolerance_weighted += stage.vulnerability * stage.flood_tolerance_days;
                stage_hits[index] += 1;
            }
        }

        let years = f64::from(self.years);
        let average_tolerance_days = if vulnerability_sum > 0.0 {
            tolerance_weighted / vulnerability_sum
        } else {
            0.0
        };

        let mut most_impacted: Option<usize> = None;
        for (index, &hits) in stage_hits.iter().enumerate() {
            if most_impacted.map_or(true, |best| hits > stage_hits[best]) {
                most_impacted = Some(index);
            }
        }
        let most_impacted_stage = most_impacted
            .map(|index| profile.stages[index].name.clone())
            .unwrap_or_else(|| FALLBACK_STAGE.to_string());

        let summary = SimulationSummary {
            probability_of_impact: f64::from(impact_years) / years,
            effective_vulnerability: vulnerability_sum / years,
            average_tolerance_days,
            flood_occurrence_rate: f64::from(flood_years) / years,
            flood_years,
            impact_years,
            most_impacted_stage,
        };

        debug!(
            crop = profile.profile.crop_name(),
            region = %region,
            seed,
            years = self.years,
            impact_years,
            "seasonal simulation complete"
        );

        Ok(summary)
    }
}

impl Default for SeasonalSimulation {
    fn default() -> Self {
        Self::from_config(&SimulationSettings::default())
    }
}

/// Aggregate outcome of a seasonal simulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationSummary {
    /// Share of years with a flood inside the growing season
    pub probability_of_impact: f64,
    /// Sum of impacted-stage vulnerabilities divided by simulated years
    pub effective_vulnerability: f64,
    /// Vulnerability-weighted mean tolerance days of impacted stages
    pub average_tolerance_days: f64,
    /// Share of years with any flood
    pub flood_occurrence_rate: f64,
    /// Years with any flood
    pub flood_years: u32,
    /// Years with a flood inside the growing season
    pub impact_years: u32,
    /// Stage hit most often (first on ties)
    pub most_impacted_stage: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agriculture::{AgriculturalDamageLibrary, CropCalendar, CropDamageProfile};

    fn library() -> &'static AgriculturalDamageLibrary {
        AgriculturalDamageLibrary::global()
    }

    #[test]
    fn test_zero_years_rejected() {
        let region = library().region("Upper Midwest").unwrap();
        let resolved = library().crop("Soybeans").unwrap().resolve_for_region(0);
        assert_eq!(
            SeasonalSimulation::new(0).run(&resolved, region),
            Err(AgricultureError::NoSimulationYears)
        );
    }

    #[test]
    fn test_unordered_season_rejected() {
        let region = FloodRegionProfile::new("Backwards", "", (200, 100, 150), 0, 0.5);
        let resolved = library().crop("Soybeans").unwrap().resolve_for_region(0);
        assert!(matches!(
            SeasonalSimulation::new(10).run(&resolved, &region),
            Err(AgricultureError::InvalidFloodSeason { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_summary() {
        let region = library().region("Upper Midwest").unwrap();
        let resolved = library().crop("Corn (Grain)").unwrap().resolve_for_region(0);
        let a = SeasonalSimulation::new(300).with_seed(11).run(&resolved, region).unwrap();
        let b = SeasonalSimulation::new(300).with_seed(11).run(&resolved, region).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rates_are_consistent() {
        for region in library().regions() {
            for crop in library().crops() {
                let resolved = crop.resolve_for_region(region.growing_season_shift_days);
                let summary = SeasonalSimulation::new(400).run(&resolved, region).unwrap();
                assert!(summary.impact_years <= summary.flood_years);
                assert!(summary.probability_of_impact <= summary.flood_occurrence_rate);
                assert!(summary.flood_occurrence_rate <= 1.0);
                assert!(summary.effective_vulnerability <= summary.probability_of_impact + 1e-12);
                assert!(crop.stages().iter().any(|s| s.name == summary.most_impacted_stage));
            }
        }
    }

    #[test]
    fn test_certain_flood_every_year() {
        let region = FloodRegionProfile::new("Certain", "", (150, 150, 150), 0, 1.0);
        let resolved = library().crop("Corn (Grain)").unwrap().resolve_for_region(0);
        let summary = SeasonalSimulation::new(50).with_seed(3).run(&resolved, &region).unwrap();
        assert_eq!(summary.flood_years, 50);
        assert_eq!(summary.impact_years, 50);
        // Day 150 is 40 days after planting: vegetative growth
        assert_eq!(summary.most_impacted_stage, "Vegetative growth");
        assert!((summary.effective_vulnerability - 0.6).abs() < 1e-12);
        assert!((summary.average_tolerance_days - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_flood_outside_season_never_impacts() {
        let region = FloodRegionProfile::new("Winter", "", (10, 20, 30), 0, 1.0);
        let resolved = library().crop("Cotton").unwrap().resolve_for_region(0);
        let summary = SeasonalSimulation::new(100).run(&resolved, &region).unwrap();
        assert_eq!(summary.flood_years, 100);
        assert_eq!(summary.impact_years, 0);
        assert_eq!(summary.average_tolerance_days, 0.0);
        // All counts tie at zero; the first stage wins
        assert_eq!(summary.most_impacted_stage, "Seeding & stand");
    }

    #[test]
    fn test_no_stages_reports_growing_season() {
        let crop = CropDamageProfile::new(
            "Pasture",
            "Pasture",
            100.0,
            CropCalendar {
                planting_window_start_day: 1,
                planting_window_end_day: 30,
                harvest_end_day: 365,
            },
            Vec::new(),
            &[],
        );
        let region = FloodRegionProfile::new("Anywhere", "", (100, 150, 200), 0, 1.0);
        let summary = SeasonalSimulation::new(20).run(&crop.resolve_for_region(0), &region).unwrap();
        assert_eq!(summary.impact_years, 20);
        assert_eq!(summary.effective_vulnerability, 0.0);
        assert_eq!(summary.most_impacted_stage, "growing season");
    }

    #[test]
    fn test_from_config() {
        let settings = SimulationSettings {
            years: 25,
            seed: Some(99),
        };
        let simulation = SeasonalSimulation::from_config(&settings);
        assert_eq!(simulation.years(), 25);
        assert_eq!(simulation.seed(), Some(99));
    }

    #[test]
    fn test_flood_day_rounds_half_to_even() {
        assert_eq!(flood_day(150.5).get(), 150);
        assert_eq!(flood_day(151.5).get(), 152);
        assert_eq!(flood_day(151.49).get(), 151);
        assert_eq!(flood_day(0.5).get(), 1);
        assert_eq!(flood_day(400.0).get(), 365);
    }

    #[test]
    fn test_name_seed_is_stable_and_distinct() {
        assert_eq!(name_seed("Rice", "Upper Midwest"), name_seed("Rice", "Upper Midwest"));
        assert_ne!(name_seed("Rice", "Upper Midwest"), name_seed("Corn", "Upper Midwest"));
        assert_ne!(name_seed("ab", "c"), name_seed("a", "bc"));
    }
}
