//! Water demand forecasting.
//!
//! This module provides:
//! - [`linear_regression_forecast`]: Least-squares trend over historical demand
//! - [`growth_rate_forecast`]: Compound growth from the historical endpoints
//! - [`DemandScenario`]: Population and per-capita driven projection with
//!   sector shares and system adjustments
//!
//! Forecasts never fail. When no meaningful projection is possible the
//! returned explanation says why.

mod forecast;
mod scenario;

pub use forecast::{growth_rate_forecast, linear_regression_forecast, DemandObservation, ForecastResult};
pub use scenario::{DemandEntry, DemandScenario, ScenarioProjection, SectorDemand, SectorShare};
