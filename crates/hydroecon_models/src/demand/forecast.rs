//! Trend and growth-rate demand forecasts.

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Demand observed (or projected) for one year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DemandObservation {
    /// Calendar year
    pub year: i32,
    /// Demand in the caller's units
    pub demand: f64,
}

impl DemandObservation {
    /// Creates an observation.
    #[inline]
    pub fn new(year: i32, demand: f64) -> Self {
        Self { year, demand }
    }
}

impl From<(i32, f64)> for DemandObservation {
    fn from((year, demand): (i32, f64)) -> Self {
        Self::new(year, demand)
    }
}

/// Historical series followed by the projection, with an explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForecastResult {
    /// Historical observations then projected years, in year order
    pub series: Vec<DemandObservation>,
    /// How the projection was produced, or why it was not
    pub explanation: String,
}

impl ForecastResult {
    fn new(series: Vec<DemandObservation>, explanation: impl Into<String>) -> Self {
        Self {
            series,
            explanation: explanation.into(),
        }
    }

    /// Points after the last historical observation.
    pub fn projected<'a>(&'a self, historical: &[DemandObservation]) -> &'a [DemandObservation] {
        self.series.get(historical.len()..).unwrap_or(&[])
    }
}

/// Years after `last_year`, stopping before the calendar overflows `i32`.
fn projected_years(last_year: i32, years_to_project: u32) -> impl Iterator<Item = i32> {
    (1..=years_to_project).map_while(move |i| i32::try_from(i).ok().and_then(|i| last_year.checked_add(i)))
}

/// Explanation suffix when fewer years were projected than requested.
fn truncation_note(series: &[DemandObservation], projected: usize, years_to_project: u32) -> String {
    if projected as u64 >= u64::from(years_to_project) {
        return String::new();
    }
    warn!(projected, years_to_project, "projection horizon exceeds the calendar range");
    let last_year = series.last().map_or(i32::MAX, |obs| obs.year);
    format!(
        " Projection stopped after {projected} of {years_to_project} years: years beyond {last_year} are out of range."
    )
}

/// Projects demand along the ordinary least-squares line through `historical`.
///
/// Projected years follow the last observation. A zero denominator
/// `n·Σx² − (Σx)²` (a single point, or all points in one year) gives a
/// flat line through the mean.
///
/// # Examples
///
/// ```
/// use hydroecon_models::demand::{linear_regression_forecast, DemandObservation};
///
/// let history = [DemandObservation::new(2020, 100.0), DemandObservation::new(2021, 110.0)];
/// let forecast = linear_regression_forecast(&history, 1);
/// let last = forecast.series.last().unwrap();
/// assert_eq!(last.year, 2022);
/// assert!((last.demand - 120.0).abs() < 1e-9);
/// ```
pub fn linear_regression_forecast(historical: &[DemandObservation], years_to_project: u32) -> ForecastResult {
    let Some(last) = historical.last() else {
        return ForecastResult::new(Vec::new(), "No data: at least one historical observation is required.");
    };

    let n = historical.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = historical.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, obs| {
        let x = f64::from(obs.year);
        (acc.0 + x, acc.1 + obs.demand, acc.2 + x * obs.demand, acc.3 + x * x)
    });

    let denominator = n * sum_x2 - sum_x * sum_x;
    let slope = if denominator == 0.0 {
        warn!(observations = historical.len(), "degenerate regression; using zero slope");
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denominator
    };
    let intercept = (sum_y - slope * sum_x) / n;

    let mut series = historical.to_vec();
    series.extend(
        projected_years(last.year, years_to_project)
            .map(|year| DemandObservation::new(year, slope * f64::from(year) + intercept)),
    );
    let note = truncation_note(&series, series.len() - historical.len(), years_to_project);

    debug!(slope, intercept, years_to_project, "linear regression forecast");

    ForecastResult::new(
        series,
        format!(
            "Linear regression: demand = {slope:.4} × year + {intercept:.4}, fitted to {} observations.{note}",
            historical.len()
        ),
    )
}

/// Compounds demand forward from the last observation.
///
/// The annual rate is `rate_override` when given, otherwise
/// `(last/first)^(1/year_span) − 1` from the first and last observations,
/// which needs two or more points, a positive year span and a positive
/// first demand. Rates are fractions (0.10 = 10 %).
///
/// # Examples
///
/// ```
/// use hydroecon_models::demand::{growth_rate_forecast, DemandObservation};
///
/// let history = [DemandObservation::new(2020, 100.0), DemandObservation::new(2022, 121.0)];
/// let forecast = growth_rate_forecast(&history, 1, None);
/// let last = forecast.series.last().unwrap();
/// assert_eq!(last.year, 2023);
/// assert!((last.demand - 133.1).abs() < 1e-9);
/// ```
pub fn growth_rate_forecast(
    historical: &[DemandObservation],
    years_to_project: u32,
    rate_override: Option<f64>,
) -> ForecastResult {
    let mut series = historical.to_vec();
    let (Some(first), Some(last)) = (historical.first(), historical.last()) else {
        return ForecastResult::new(series, "Insufficient data: no historical observations.");
    };

    let rate = match rate_override {
        Some(rate) => rate,
        None if historical.len() < 2 => {
            return ForecastResult::new(
                series,
                "Insufficient data: a single observation needs an explicit growth rate.",
            );
        }
        None => {
            let year_span = (i64::from(last.year) - i64::from(first.year)) as f64;
            if year_span <= 0.0 || first.demand <= 0.0 {
                warn!(year_span, first = first.demand, "invalid growth-rate history");
                return ForecastResult::new(
                    series,
                    "Invalid data: observations must span at least one year and start from positive demand.",
                );
            }
            (last.demand / first.demand).powf(1.0 / year_span) - 1.0
        }
    };

    let mut previous = last.demand;
    series.extend(projected_years(last.year, years_to_project).map(|year| {
        previous *= 1.0 + rate;
        DemandObservation::new(year, previous)
    }));
    let note = truncation_note(&series, series.len() - historical.len(), years_to_project);

    debug!(rate, years_to_project, "growth rate forecast");

    let source = if rate_override.is_some() { "specified" } else { "historical compound" };
    ForecastResult::new(
        series,
        format!(
            "Growth rate: {source} annual rate of {:.2}% applied from {}.{note}",
            rate * 100.0,
            last.year
        ),
    )
}
