//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths
//! and behave as documented from outside the crate.

use std::path::PathBuf;

/// Interpolation is accessible via absolute path.
#[test]
fn test_interpolator_exports() {
    use hydroecon_core::math::interpolators::interpolate_clamped;
    use hydroecon_core::math::interpolators::ClampedLinearInterpolator;
    use hydroecon_core::math::interpolators::Interpolator;

    let curve = ClampedLinearInterpolator::new(&[0.0, 10.0], &[0.0, 100.0]).unwrap();
    assert_eq!(curve.interpolate(5.0), 50.0);
    assert_eq!(curve.domain(), (0.0, 10.0));
    assert_eq!(interpolate_clamped(&[0.0, 10.0], &[0.0, 100.0], 20.0, 0.0), Some(100.0));
}

/// Integration is accessible via absolute path.
#[test]
fn test_integration_exports() {
    use hydroecon_core::math::integration::trapezoid_descending;

    let area = trapezoid_descending(&[1.0, 0.0], &[0.0, 10.0]);
    assert_eq!(area, 5.0);
}

/// Types are accessible both through the module and the re-export.
#[test]
fn test_types_module_exports() {
    use hydroecon_core::types::day_of_year::DayOfYear as ModuleDay;
    use hydroecon_core::types::error::InterpolationError as ModuleError;
    use hydroecon_core::types::{DayOfYear, InterpolationError};

    let day: ModuleDay = DayOfYear::clamped(-3);
    assert_eq!(day, DayOfYear::FIRST);

    let err: ModuleError = InterpolationError::InsufficientData { got: 0, need: 1 };
    assert!(err.to_string().contains('0'));
}

/// Configuration loads from a TOML file and validates it.
#[test]
fn test_config_from_file() {
    use hydroecon_core::config::{EngineConfig, LogLevel};

    let path: PathBuf = std::env::temp_dir().join(format!("hydroecon_config_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
log_level = "debug"
discount_rate = 0.03
analysis_period_years = 30

[simulation]
years = 250
seed = 42
"#,
    )
    .unwrap();

    let config = EngineConfig::from_file(&path);
    let _ = std::fs::remove_file(&path);
    let config = config.unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.discount_rate, 0.03);
    assert_eq!(config.analysis_period_years, 30);
    assert_eq!(config.construction_months, 12);
    assert_eq!(config.simulation.years, 250);
    assert_eq!(config.simulation.seed, Some(42));
    assert_eq!(config.field_acreage, 1.0);
}

/// A missing file is reported, not panicked on.
#[test]
fn test_config_missing_file() {
    use hydroecon_core::config::{ConfigError, EngineConfig};

    let path = std::env::temp_dir().join("hydroecon_does_not_exist.toml");
    assert!(matches!(EngineConfig::from_file(&path), Err(ConfigError::FileError(_))));
}

/// Invalid values in a file fail validation.
#[test]
fn test_config_rejects_invalid_values() {
    use hydroecon_core::config::{ConfigError, EngineConfig};

    let result = EngineConfig::from_toml_str("field_acreage = -1.0");
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { field: "field_acreage", .. })
    ));
}
