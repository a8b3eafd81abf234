//! Population-driven demand scenarios.

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GALLONS_PER_ACRE_FOOT: f64 = 325_851.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Share of total demand held by one sector at the base year and at the
/// end of the forecast.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectorShare {
    /// Sector name
    pub name: String,
    /// Percent of demand at the base year
    pub current_percent: f64,
    /// Percent of demand at the forecast horizon
    pub future_percent: f64,
    /// Takes whatever the other sectors leave of 100 %
    pub is_residual: bool,
}

impl SectorShare {
    /// Creates a fixed sector share.
    pub fn new(name: impl Into<String>, current_percent: f64, future_percent: f64) -> Self {
        Self {
            name: name.into(),
            current_percent,
            future_percent,
            is_residual: false,
        }
    }

    /// Creates a residual sector; its percents are filled in by
    /// [`DemandScenario::with_sectors`].
    pub fn residual(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_percent: 0.0,
            future_percent: 0.0,
            is_residual: true,
        }
    }

    /// Percent share `t` years into a `forecast_years` horizon.
    fn percent_at(&self, t: u32, forecast_years: u32) -> f64 {
        if forecast_years == 0 {
            return self.current_percent;
        }
        let fraction = f64::from(t) / f64::from(forecast_years);
        self.current_percent + (self.future_percent - self.current_percent) * fraction
    }
}

/// Demand assumptions for one scenario. Rates and adjustments are percents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemandScenario {
    /// Scenario name
    pub name: String,
    /// First projected year
    pub base_year: i32,
    /// Population at the base year
    pub base_population: f64,
    /// Demand per person at the base year
    pub base_per_capita_demand: f64,
    /// Annual population growth, percent
    pub population_growth_rate: f64,
    /// Annual change in per-capita demand, percent
    pub per_capita_change_rate: f64,
    /// Sector split of total demand
    pub sectors: Vec<SectorShare>,
    /// Demand reduction from system improvements, percent
    pub system_improvements_percent: f64,
    /// Distribution losses, percent
    pub system_losses_percent: f64,
}

impl DemandScenario {
    /// Creates a scenario with no sectors and no system adjustments.
    pub fn new(
        name: impl Into<String>,
        base_year: i32,
        base_population: f64,
        base_per_capita_demand: f64,
    ) -> Self {
        Self {
            name: name.into(),
            base_year,
            base_population,
            base_per_capita_demand,
            population_growth_rate: 0.0,
            per_capita_change_rate: 0.0,
            sectors: Vec::new(),
            system_improvements_percent: 0.0,
            system_losses_percent: 0.0,
        }
    }

    /// Sets annual population and per-capita growth, in percent.
    pub fn with_growth(mut self, population_growth_rate: f64, per_capita_change_rate: f64) -> Self {
        self.population_growth_rate = population_growth_rate;
        self.per_capita_change_rate = per_capita_change_rate;
        self
    }

    /// Sets system improvements and losses, in percent.
    pub fn with_system_adjustments(mut self, improvements_percent: f64, losses_percent: f64) -> Self {
        self.system_improvements_percent = improvements_percent;
        self.system_losses_percent = losses_percent;
        self
    }

    /// Sets the sector split. The first residual sector receives
    /// `max(0, 100 − Σ other sectors)` at both ends of the horizon.
    pub fn with_sectors(mut self, sectors: Vec<SectorShare>) -> Self {
        self.sectors = sectors;
        self.update_residual_share();
        self
    }

    fn update_residual_share(&mut self) {
        let (current, future) = self
            .sectors
            .iter()
            .filter(|s| !s.is_residual)
            .fold((0.0, 0.0), |(c, f), s| (c + s.current_percent, f + s.future_percent));

        if let Some(residual) = self.sectors.iter_mut().find(|s| s.is_residual) {
            residual.current_percent = (100.0 - current).max(0.0);
            residual.future_percent = (100.0 - future).max(0.0);
        }
    }

    /// Demand after losses and improvements.
    ///
    /// `demand / (1 − losses) × (1 − improvements)`; NaN when losses reach
    /// 100 % or the result is not finite.
    pub fn adjusted_demand(&self, demand: f64) -> f64 {
        let losses = self.system_losses_percent / 100.0;
        if losses >= 1.0 {
            return f64::NAN;
        }
        let adjusted = demand / (1.0 - losses) * (1.0 - self.system_improvements_percent / 100.0);
        if adjusted.is_finite() {
            adjusted
        } else {
            f64::NAN
        }
    }

    /// Projects demand for the base year and each of the next
    /// `forecast_years` years.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydroecon_models::demand::{DemandScenario, SectorShare};
    ///
    /// let scenario = DemandScenario::new("Baseline", 2025, 10_000.0, 150.0)
    ///     .with_growth(1.0, 0.0)
    ///     .with_sectors(vec![
    ///         SectorShare::new("Industrial", 20.0, 30.0),
    ///         SectorShare::residual("Residential"),
    ///     ]);
    ///
    /// let projection = scenario.project(10);
    /// assert_eq!(projection.entries.len(), 11);
    /// assert_eq!(projection.entries[10].year, 2035);
    /// assert!((projection.entries[1].growth_rate - 1.0).abs() < 1e-9);
    /// ```
    pub fn project(&self, forecast_years: u32) -> ScenarioProjection {
        let population_factor = 1.0 + self.population_growth_rate / 100.0;
        let per_capita_factor = 1.0 + self.per_capita_change_rate / 100.0;

        let mut entries: Vec<DemandEntry> = Vec::new();
        for t in 0..=forecast_years {
            let Some((exponent, year)) = i32::try_from(t)
                .ok()
                .and_then(|e| self.base_year.checked_add(e).map(|year| (e, year)))
            else {
                break;
            };
            let population = self.base_population * population_factor.powi(exponent);
            let per_capita = self.base_per_capita_demand * per_capita_factor.powi(exponent);
            let demand = population * per_capita;

            let sectors = self
                .sectors
                .iter()
                .map(|sector| SectorDemand {
                    name: sector.name.clone(),
                    demand: demand * sector.percent_at(t, forecast_years) / 100.0,
                })
                .collect();

            let growth_rate = match entries.last() {
                Some(previous) => (demand / previous.demand - 1.0) * 100.0,
                None => 0.0,
            };

            entries.push(DemandEntry {
                year,
                population,
                per_capita_demand: per_capita,
                demand,
                sectors,
                adjusted_demand: self.adjusted_demand(demand),
                growth_rate,
            });
        }

        if self.system_losses_percent >= 100.0 {
            warn!(scenario = %self.name, losses = self.system_losses_percent, "adjusted demand undefined");
        }
        debug!(scenario = %self.name, forecast_years, "scenario projection");

        let mut explanation = self.explanation();
        let projected = entries.len() as u64;
        if projected < u64::from(forecast_years) + 1 {
            warn!(scenario = %self.name, forecast_years, "projection horizon exceeds the calendar range");
            explanation.push_str(&format!(
                " Projection stopped after {} of {} years: later years are out of range.",
                projected.saturating_sub(1),
                forecast_years
            ));
        }

        ScenarioProjection { entries, explanation }
    }

    fn explanation(&self) -> String {
        let mut text = String::from(
            "Population = BasePopulation × (1 + PopulationGrowthRate)^t, \
             Per Capita = BasePerCapitaDemand × (1 + PerCapitaDemandChangeRate)^t, \
             Total Demand = Population × Per Capita.",
        );
        if !self.sectors.is_empty() {
            let shares: Vec<String> = self
                .sectors
                .iter()
                .map(|s| format!("{} {:.1}%→{:.1}%", s.name, s.current_percent, s.future_percent))
                .collect();
            text.push_str(&format!(" Shares interpolated: {}.", shares.join(", ")));
        }
        text.push_str(&format!(
            " Adjusted Demand = Total Demand ÷ (1 - Losses %) × (1 - Improvements %). \
             Scenario uses {:.1}% improvements and {:.1}% losses.",
            self.system_improvements_percent, self.system_losses_percent
        ));
        if self.system_losses_percent >= 100.0 {
            text.push_str(" Adjusted demand is undefined when losses are 100% or greater.");
        }
        text
    }
}

/// Demand attributed to one sector in one year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectorDemand {
    /// Sector name
    pub name: String,
    /// Sector demand
    pub demand: f64,
}

/// One projected year of a scenario.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemandEntry {
    /// Calendar year
    pub year: i32,
    /// Projected population
    pub population: f64,
    /// Projected demand per person
    pub per_capita_demand: f64,
    /// Total demand
    pub demand: f64,
    /// Demand split by sector, in scenario order
    pub sectors: Vec<SectorDemand>,
    /// Demand after losses and improvements (NaN when undefined)
    pub adjusted_demand: f64,
    /// Percent change in total demand from the previous year
    pub growth_rate: f64,
}

impl DemandEntry {
    /// Demand for the named sector.
    pub fn sector(&self, name: &str) -> Option<f64> {
        self.sectors.iter().find(|s| s.name == name).map(|s| s.demand)
    }

    /// Total demand converted from gallons per day to acre-feet per year.
    pub fn demand_acre_feet(&self) -> f64 {
        self.demand * DAYS_PER_YEAR / GALLONS_PER_ACRE_FOOT
    }

    /// Adjusted demand converted from gallons per day to acre-feet per year.
    pub fn adjusted_demand_acre_feet(&self) -> f64 {
        self.adjusted_demand * DAYS_PER_YEAR / GALLONS_PER_ACRE_FOOT
    }
}

/// Yearly entries of a scenario projection with an explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScenarioProjection {
    /// Base year first, one entry per year
    pub entries: Vec<DemandEntry>,
    /// Formulas and assumptions used
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario() -> DemandScenario {
        DemandScenario::new("Baseline", 2020, 1_000.0, 100.0)
            .with_growth(2.0, -1.0)
            .with_sectors(vec![
                SectorShare::new("Industrial", 10.0, 20.0),
                SectorShare::new("Commercial", 20.0, 20.0),
                SectorShare::residual("Residential"),
            ])
    }

    #[test]
    fn test_residual_share_fills_remainder() {
        let s = scenario();
        let residual = &s.sectors[2];
        assert_eq!(residual.current_percent, 70.0);
        assert_eq!(residual.future_percent, 60.0);
    }

    #[test]
    fn test_residual_share_never_negative() {
        let s = DemandScenario::new("Over", 2020, 1.0, 1.0).with_sectors(vec![
            SectorShare::new("Industrial", 80.0, 90.0),
            SectorShare::new("Commercial", 40.0, 30.0),
            SectorShare::residual("Residential"),
        ]);
        assert_eq!(s.sectors[2].current_percent, 0.0);
        assert_eq!(s.sectors[2].future_percent, 0.0);
    }

    #[test]
    fn test_projection_compounds() {
        let projection = scenario().project(5);
        assert_eq!(projection.entries.len(), 6);

        let base = &projection.entries[0];
        assert_eq!(base.year, 2020);
        assert_relative_eq!(base.demand, 100_000.0, epsilon = 1e-9);
        assert_eq!(base.growth_rate, 0.0);

        let third = &projection.entries[3];
        let expected = 1_000.0 * 1.02f64.powi(3) * 100.0 * 0.99f64.powi(3);
        assert_relative_eq!(third.demand, expected, max_relative = 1e-12);
        let growth = (1.02 * 0.99 - 1.0) * 100.0;
        assert_relative_eq!(third.growth_rate, growth, epsilon = 1e-9);
    }

    #[test]
    fn test_sector_shares_interpolate() {
        let projection = scenario().project(10);
        let first = &projection.entries[0];
        let middle = &projection.entries[5];
        let last = &projection.entries[10];
        assert_relative_eq!(first.sector("Industrial").unwrap(), first.demand * 0.10, max_relative = 1e-12);
        assert_relative_eq!(middle.sector("Industrial").unwrap(), middle.demand * 0.15, max_relative = 1e-12);
        assert_relative_eq!(last.sector("Residential").unwrap(), last.demand * 0.60, max_relative = 1e-12);
        assert!(last.sector("Agricultural").is_none());
    }

    #[test]
    fn test_zero_horizon_uses_current_shares() {
        let projection = scenario().project(0);
        assert_eq!(projection.entries.len(), 1);
        let entry = &projection.entries[0];
        assert_relative_eq!(entry.sector("Industrial").unwrap(), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_adjusted_demand() {
        let s = scenario().with_system_adjustments(10.0, 20.0);
        assert_relative_eq!(s.adjusted_demand(80.0), 90.0, epsilon = 1e-12);

        let lossy = scenario().with_system_adjustments(0.0, 100.0);
        assert!(lossy.adjusted_demand(80.0).is_nan());
        let projection = lossy.project(2);
        assert!(projection.entries.iter().all(|e| e.adjusted_demand.is_nan()));
        assert!(projection.explanation.contains("undefined"));
    }

    #[test]
    fn test_explanation_lists_shares() {
        let projection = scenario().project(1);
        assert!(projection.explanation.contains("Industrial 10.0%→20.0%"));
        assert!(projection.explanation.contains("Residential 70.0%→60.0%"));
    }

    #[test]
    fn test_projection_stops_at_calendar_limit() {
        let projection = DemandScenario::new("Late", i32::MAX - 2, 10.0, 1.0).project(5);
        assert_eq!(projection.entries.len(), 3);
        assert_eq!(projection.entries[2].year, i32::MAX);
        assert!(projection.explanation.contains("stopped after 2 of 5 years"));

        let full = DemandScenario::new("Early", i32::MIN, 10.0, 1.0).project(3);
        assert_eq!(full.entries.len(), 4);
        assert_eq!(full.entries[0].year, i32::MIN);
        assert!(!full.explanation.contains("stopped"));
    }

    #[test]
    fn test_acre_feet_conversion() {
        let projection = DemandScenario::new("Unit", 2020, 1.0, GALLONS_PER_ACRE_FOOT).project(0);
        assert_relative_eq!(projection.entries[0].demand_acre_feet(), 365.0, epsilon = 1e-9);
    }
}
