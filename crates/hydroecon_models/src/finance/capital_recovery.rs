//! Capital recovery factor.

use super::FinanceError;

/// Capital recovery factor: the annuity converting a present lump sum into
/// `periods` equal end-of-period payments at `rate`.
///
/// ```text
/// CRF = r(1+r)^n / ((1+r)^n - 1),    CRF = 1/n when r = 0
/// ```
///
/// # Errors
///
/// `FinanceError::InvalidPeriods` when `periods <= 0`.
///
/// # Examples
///
/// ```
/// use hydroecon_models::finance::capital_recovery_factor;
///
/// let crf = capital_recovery_factor(0.05, 30).unwrap();
/// assert!((crf - 0.0650514).abs() < 1e-7);
/// assert_eq!(capital_recovery_factor(0.0, 4).unwrap(), 0.25);
/// ```
pub fn capital_recovery_factor(rate: f64, periods: i32) -> Result<f64, FinanceError> {
    if periods <= 0 {
        return Err(FinanceError::InvalidPeriods { periods });
    }

    if rate == 0.0 {
        return Ok(1.0 / periods as f64);
    }

    let growth = (1.0 + rate).powi(periods);
    Ok(rate * growth / (growth - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(capital_recovery_factor(0.0, 1).unwrap(), 1.0);
        assert_eq!(capital_recovery_factor(0.0, 50).unwrap(), 1.0 / 50.0);
    }

    #[test]
    fn test_single_period_returns_one_plus_rate() {
        assert_relative_eq!(capital_recovery_factor(0.07, 1).unwrap(), 1.07, epsilon = 1e-12);
    }

    #[test]
    fn test_known_value() {
        // 2.75% over 50 years
        let crf = capital_recovery_factor(0.0275, 50).unwrap();
        assert_relative_eq!(crf, 0.037041, epsilon = 1e-6);
    }

    #[test]
    fn test_non_positive_periods_rejected() {
        assert_eq!(
            capital_recovery_factor(0.05, 0),
            Err(FinanceError::InvalidPeriods { periods: 0 })
        );
        assert!(capital_recovery_factor(0.0, -3).is_err());
    }

    proptest! {
        #[test]
        fn test_matches_closed_form(rate in 0.0001f64..0.25, periods in 1i32..200) {
            let expected = rate * (1.0 + rate).powf(periods as f64)
                / ((1.0 + rate).powf(periods as f64) - 1.0);
            let crf = capital_recovery_factor(rate, periods).unwrap();
            prop_assert!((crf - expected).abs() < 1e-9);
        }

        #[test]
        fn test_zero_rate_reciprocal(periods in 1i32..10_000) {
            prop_assert_eq!(capital_recovery_factor(0.0, periods).unwrap(), 1.0 / periods as f64);
        }
    }
}
