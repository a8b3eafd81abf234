//! Engine configuration management.
//!
//! Handles loading analysis defaults from TOML files and environment
//! variables. Priority (highest to lowest):
//! 1. Environment variables (`HYDROECON_*`)
//! 2. Config file
//! 3. Default values

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A numeric setting is outside its valid range.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Name of the offending setting
        field: &'static str,
        /// Offending value, as text
        value: String,
    },

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// Tracing subscriber installation failed.
    #[error("Telemetry initialisation error: {0}")]
    Telemetry(String),
}

/// Log levels supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Per-calculation results
    Debug,
    /// Default level
    #[default]
    Info,
    /// Degenerate inputs
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Settings for the seasonal flood simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of simulated seasons
    pub years: u32,
    /// Fixed RNG seed; when absent a seed is derived from the crop and region
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            years: 1000,
            seed: None,
        }
    }
}

/// Engine configuration.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `log_level` | info | Tracing filter level |
/// | `discount_rate` | 0.0275 | Annual discount rate |
/// | `analysis_period_years` | 50 | Amortisation horizon |
/// | `construction_months` | 12 | Construction duration for IDC |
/// | `simulation.years` | 1000 | Simulated flood seasons |
/// | `field_acreage` | 1.0 | Acreage for damage tables |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Annual discount rate as a fraction
    pub discount_rate: f64,
    /// Analysis period in years
    pub analysis_period_years: i32,
    /// Construction duration in months
    pub construction_months: i32,
    /// Seasonal simulation settings
    pub simulation: SimulationSettings,
    /// Field acreage used for agricultural damage tables
    pub field_acreage: f64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            discount_rate: 0.0275,
            analysis_period_years: 50,
            construction_months: 12,
            simulation: SimulationSettings::default(),
            field_acreage: 1.0,
        }
    }
}

const ENV_LOG_LEVEL: &str = "HYDROECON_LOG_LEVEL";
const ENV_DISCOUNT_RATE: &str = "HYDROECON_DISCOUNT_RATE";
const ENV_ANALYSIS_PERIOD: &str = "HYDROECON_ANALYSIS_PERIOD_YEARS";
const ENV_CONSTRUCTION_MONTHS: &str = "HYDROECON_CONSTRUCTION_MONTHS";
const ENV_SIMULATION_YEARS: &str = "HYDROECON_SIMULATION_YEARS";
const ENV_SIMULATION_SEED: &str = "HYDROECON_SIMULATION_SEED";
const ENV_FIELD_ACREAGE: &str = "HYDROECON_FIELD_ACREAGE";

fn parse_env<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", name, raw)))
}

impl EngineConfig {
    /// Create a new EngineConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from environment variables over defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Override fields from a variable lookup (`HYDROECON_*` names).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(rate) = lookup(ENV_DISCOUNT_RATE) {
            self.discount_rate = parse_env(ENV_DISCOUNT_RATE, &rate)?;
        }
        if let Some(period) = lookup(ENV_ANALYSIS_PERIOD) {
            self.analysis_period_years = parse_env(ENV_ANALYSIS_PERIOD, &period)?;
        }
        if let Some(months) = lookup(ENV_CONSTRUCTION_MONTHS) {
            self.construction_months = parse_env(ENV_CONSTRUCTION_MONTHS, &months)?;
        }
        if let Some(years) = lookup(ENV_SIMULATION_YEARS) {
            self.simulation.years = parse_env(ENV_SIMULATION_YEARS, &years)?;
        }
        if let Some(seed) = lookup(ENV_SIMULATION_SEED) {
            self.simulation.seed = Some(parse_env(ENV_SIMULATION_SEED, &seed)?);
        }
        if let Some(acreage) = lookup(ENV_FIELD_ACREAGE) {
            self.field_acreage = parse_env(ENV_FIELD_ACREAGE, &acreage)?;
        }
        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.discount_rate.is_finite() || self.discount_rate < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "discount_rate",
                value: self.discount_rate.to_string(),
            });
        }
        if self.analysis_period_years <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis_period_years",
                value: self.analysis_period_years.to_string(),
            });
        }
        if self.construction_months < 0 {
            return Err(ConfigError::InvalidValue {
                field: "construction_months",
                value: self.construction_months.to_string(),
            });
        }
        if !self.field_acreage.is_finite() || self.field_acreage <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "field_acreage",
                value: self.field_acreage.to_string(),
            });
        }
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Starts from the config file when one is given (defaults otherwise) and
/// applies any `HYDROECON_*` environment variables on top.
pub fn build_config(path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    let mut config = match path {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    config.apply_env(|name| std::env::var(name).ok())?;
    tracing::debug!(
        log_level = %config.log_level,
        discount_rate = config.discount_rate,
        analysis_period_years = config.analysis_period_years,
        "Engine configuration loaded"
    );
    Ok(config)
}
