//! Annualised project cost and benefit-cost ratio.
//!
//! The annualiser converts a project's first cost, interest during
//! construction and discounted future costs into an equivalent annual
//! construction charge, adds annual O&M, and compares the result to annual
//! benefits.

use super::interest_during_construction::{self, ExpenditureSchedule};
use super::{capital_recovery_factor, FinanceError};
use hydroecon_core::config::EngineConfig;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cost incurred after the base year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FutureCost {
    /// Nominal cost
    pub cost: f64,
    /// Year offset from the base year
    pub year: i32,
    /// Additional fraction of a year within `year` (0 = start of year)
    pub timing_offset: f64,
}

impl FutureCost {
    /// A cost incurred at the start of `year`.
    pub fn new(cost: f64, year: i32) -> Self {
        Self {
            cost,
            year,
            timing_offset: 0.0,
        }
    }

    /// Sets the within-year timing offset.
    pub fn with_timing_offset(mut self, timing_offset: f64) -> Self {
        self.timing_offset = timing_offset;
        self
    }

    /// Present value at `rate`.
    #[inline]
    pub fn present_value(&self, rate: f64) -> f64 {
        self.cost / (1.0 + rate).powf(self.year as f64 + self.timing_offset)
    }
}

/// Inputs to [`compute`].
///
/// # Default Values
///
/// | Parameter | Default |
/// |-----------|---------|
/// | `periods` | 1 |
/// | `construction_months` | 12 |
/// | `future_costs` | none |
/// | `idc_schedule` | even monthly spread |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnualizerInputs {
    /// Project first cost
    pub first_cost: f64,
    /// Annual discount rate
    pub rate: f64,
    /// Annual operation and maintenance cost
    pub annual_om: f64,
    /// Annual benefits
    pub annual_benefits: f64,
    /// Costs incurred after the base year
    pub future_costs: Vec<FutureCost>,
    /// Analysis period in years
    pub periods: i32,
    /// Construction duration in months
    pub construction_months: i32,
    /// Explicit construction expenditure schedule
    pub idc_schedule: Option<ExpenditureSchedule>,
}

impl AnnualizerInputs {
    /// Creates inputs with a one-year period and a 12-month construction.
    pub fn new(first_cost: f64, rate: f64, annual_om: f64, annual_benefits: f64) -> Self {
        Self {
            first_cost,
            rate,
            annual_om,
            annual_benefits,
            future_costs: Vec::new(),
            periods: 1,
            construction_months: 12,
            idc_schedule: None,
        }
    }

    /// Creates inputs taking rate, period and construction length from the
    /// engine configuration.
    pub fn from_config(config: &EngineConfig, first_cost: f64, annual_om: f64, annual_benefits: f64) -> Self {
        Self::new(first_cost, config.discount_rate, annual_om, annual_benefits)
            .with_periods(config.analysis_period_years)
            .with_construction_months(config.construction_months)
    }

    /// Sets the future costs.
    pub fn with_future_costs(mut self, future_costs: Vec<FutureCost>) -> Self {
        self.future_costs = future_costs;
        self
    }

    /// Sets the analysis period.
    pub fn with_periods(mut self, periods: i32) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the construction duration.
    pub fn with_construction_months(mut self, construction_months: i32) -> Self {
        self.construction_months = construction_months;
        self
    }

    /// Sets an explicit construction expenditure schedule.
    pub fn with_idc_schedule(mut self, schedule: ExpenditureSchedule) -> Self {
        self.idc_schedule = Some(schedule);
        self
    }
}

/// Annualisation result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnualizationResult {
    /// Interest during construction
    pub idc: f64,
    /// First cost + IDC + present value of future costs
    pub total_investment: f64,
    /// Capital recovery factor applied
    pub crf: f64,
    /// Annualised investment plus annual O&M
    pub annual_cost: f64,
    /// Benefit-cost ratio; NaN when the annual cost is zero
    pub bcr: f64,
}

/// Compute total annualised cost and benefit-cost ratio.
///
/// The amortisation horizon is `max(periods, max(1, latest future-cost
/// year))`, so it always covers the last future cost.
///
/// # Examples
///
/// ```
/// use hydroecon_models::finance::{annualizer, AnnualizerInputs};
///
/// let inputs = AnnualizerInputs::new(1_000.0, 0.0, 0.0, 0.0).with_construction_months(0);
/// let result = annualizer::compute(&inputs).unwrap();
/// assert_eq!(result.annual_cost, 1_000.0);
/// assert_eq!(result.bcr, 0.0);
/// ```
pub fn compute(inputs: &AnnualizerInputs) -> Result<AnnualizationResult, FinanceError> {
    let idc = interest_during_construction::compute(
        inputs.first_cost,
        inputs.rate,
        inputs.construction_months,
        inputs.idc_schedule.as_ref(),
    );

    let pv_future: f64 = inputs
        .future_costs
        .iter()
        .map(|fc| fc.present_value(inputs.rate))
        .sum();
    let max_year = inputs.future_costs.iter().map(|fc| fc.year).max().unwrap_or(0);

    let total_investment = inputs.first_cost + idc + pv_future;
    let final_periods = inputs.periods.max(max_year.max(1));
    let crf = capital_recovery_factor(inputs.rate, final_periods)?;
    let annual_cost = total_investment * crf + inputs.annual_om;

    let bcr = if annual_cost == 0.0 {
        warn!("Annual cost is zero; benefit-cost ratio is undefined");
        f64::NAN
    } else {
        inputs.annual_benefits / annual_cost
    };

    debug!(
        idc,
        total_investment,
        crf,
        annual_cost,
        bcr,
        periods = final_periods,
        "Annualised project cost"
    );

    Ok(AnnualizationResult {
        idc,
        total_investment,
        crf,
        annual_cost,
        bcr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let inputs = AnnualizerInputs::new(100.0, 0.05, 1.0, 2.0);
        assert_eq!(inputs.periods, 1);
        assert_eq!(inputs.construction_months, 12);
        assert!(inputs.future_costs.is_empty());
        assert!(inputs.idc_schedule.is_none());
    }

    #[test]
    fn test_zero_annual_cost_gives_nan_bcr() {
        let inputs = AnnualizerInputs::new(0.0, 0.05, 0.0, 500.0);
        let result = compute(&inputs).unwrap();
        assert_eq!(result.annual_cost, 0.0);
        assert!(result.bcr.is_nan());
        assert!(!result.bcr.is_infinite());
    }

    #[test]
    fn test_full_computation() {
        let inputs = AnnualizerInputs::new(1_000_000.0, 0.05, 20_000.0, 150_000.0)
            .with_periods(30)
            .with_future_costs(vec![FutureCost::new(100_000.0, 10)]);
        let result = compute(&inputs).unwrap();

        let idc = interest_during_construction::compute(1_000_000.0, 0.05, 12, None);
        let pv = 100_000.0 / 1.05f64.powi(10);
        let crf = capital_recovery_factor(0.05, 30).unwrap();
        let annual_cost = (1_000_000.0 + idc + pv) * crf + 20_000.0;

        assert_relative_eq!(result.idc, idc, epsilon = 1e-9);
        assert_relative_eq!(result.total_investment, 1_000_000.0 + idc + pv, epsilon = 1e-6);
        assert_relative_eq!(result.crf, crf, epsilon = 1e-12);
        assert_relative_eq!(result.annual_cost, annual_cost, epsilon = 1e-6);
        assert_relative_eq!(result.bcr, 150_000.0 / annual_cost, epsilon = 1e-12);
    }

    #[test]
    fn test_horizon_extends_to_latest_future_cost() {
        let inputs = AnnualizerInputs::new(1_000.0, 0.04, 0.0, 0.0)
            .with_periods(5)
            .with_construction_months(0)
            .with_future_costs(vec![FutureCost::new(10.0, 3), FutureCost::new(10.0, 25)]);
        let result = compute(&inputs).unwrap();
        assert_relative_eq!(result.crf, capital_recovery_factor(0.04, 25).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_periods_use_one() {
        let inputs = AnnualizerInputs::new(1_000.0, 0.04, 0.0, 0.0)
            .with_periods(0)
            .with_construction_months(0);
        let result = compute(&inputs).unwrap();
        assert_relative_eq!(result.crf, 1.04, epsilon = 1e-12);
    }

    #[test]
    fn test_future_cost_timing_offset() {
        let cost = FutureCost::new(1_000.0, 2).with_timing_offset(0.5);
        assert_relative_eq!(cost.present_value(0.1), 1_000.0 / 1.1f64.powf(2.5), epsilon = 1e-9);
    }

    #[test]
    fn test_explicit_idc_schedule_is_used() {
        let schedule = ExpenditureSchedule::new(vec![1_000.0]).with_timings(vec!["beginning".into()]);
        let inputs = AnnualizerInputs::new(1_000.0, 0.12, 0.0, 0.0)
            .with_construction_months(6)
            .with_idc_schedule(schedule);
        let result = compute(&inputs).unwrap();
        assert_relative_eq!(result.idc, 1_000.0 * 0.01 * 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default();
        let inputs = AnnualizerInputs::from_config(&config, 1.0, 2.0, 3.0);
        assert_eq!(inputs.periods, 50);
        assert_eq!(inputs.construction_months, 12);
        assert_relative_eq!(inputs.rate, 0.0275);
    }
}
