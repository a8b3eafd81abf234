//! Expected annual damage (EAD).
//!
//! EAD is the area under the damage/exceedance-probability curve. Points are
//! integrated in descending probability order with the trapezoidal rule,
//! after closing the curve at both ends:
//! - if no point has probability 1, `(1, 0)` is prepended
//! - if no point has probability 0, `(0, max damage)` is appended
//!
//! Damages need not increase as probability falls; a non-monotonic curve is
//! integrated as given and may produce any sign.

use super::EadError;
use crate::finance::capital_recovery_factor;
use hydroecon_core::math::integration::trapezoid_descending;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Expected annual damage of a probability/damage curve.
///
/// Inputs may be supplied in any order; the result is the same for every
/// permutation of the pairs.
///
/// # Errors
///
/// - `EadError::LengthMismatch` when the slices differ in length
/// - `EadError::Empty` when no points are given
/// - `EadError::ProbabilityOutOfRange` when a probability is outside [0, 1]
///
/// # Examples
///
/// ```
/// use hydroecon_models::flood::ead;
///
/// let value = ead::compute(&[0.9, 0.1], &[10.0, 50.0]).unwrap();
/// let closed = ead::compute(&[1.0, 0.9, 0.1, 0.0], &[0.0, 10.0, 50.0, 50.0]).unwrap();
/// assert_eq!(value, closed);
/// assert!((value - 29.5).abs() < 1e-12);
/// ```
pub fn compute(probabilities: &[f64], damages: &[f64]) -> Result<f64, EadError> {
    if probabilities.len() != damages.len() {
        warn!(
            probabilities = probabilities.len(),
            damages = damages.len(),
            "Rejected EAD input with mismatched lengths"
        );
        return Err(EadError::LengthMismatch {
            probabilities: probabilities.len(),
            damages: damages.len(),
        });
    }
    if probabilities.is_empty() {
        return Err(EadError::Empty);
    }
    if let Some((index, &probability)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !(0.0..=1.0).contains(*p))
    {
        warn!(index, probability, "Rejected EAD input with probability outside [0, 1]");
        return Err(EadError::ProbabilityOutOfRange { index, probability });
    }

    let mut points: Vec<(f64, f64)> = probabilities
        .iter()
        .copied()
        .zip(damages.iter().copied())
        .collect();
    // Descending probability; ties ordered by damage so any permutation of
    // the input yields the same sequence.
    points.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    });

    let max_damage = damages.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if points[0].0 < 1.0 {
        points.insert(0, (1.0, 0.0));
    }
    if points[points.len() - 1].0 > 0.0 {
        points.push((0.0, max_damage));
    }

    let (ps, ds): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
    let ead = trapezoid_descending(&ps, &ds);

    debug!(points = ps.len(), ead, "Computed expected annual damage");
    Ok(ead)
}

/// Equivalent annual damage: base EAD plus future damages amortised over
/// the analysis period.
///
/// ```text
/// EqAD = ead + future_damages · CRF(rate, period_years)
/// ```
///
/// # Errors
///
/// `InvalidPeriod` when `period_years <= 0`, `NegativeFutureDamages` when
/// `future_damages < 0`, `NegativeRate` when `rate < 0`.
///
/// # Examples
///
/// ```
/// use hydroecon_models::flood::ead;
///
/// let eqad = ead::compute_equivalent_annual_damage(1_000.0, 500.0, 10, 0.0).unwrap();
/// assert!((eqad - 1_050.0).abs() < 1e-9);
/// ```
pub fn compute_equivalent_annual_damage(
    ead: f64,
    future_damages: f64,
    period_years: i32,
    rate: f64,
) -> Result<f64, EadError> {
    if period_years <= 0 {
        return Err(EadError::InvalidPeriod(period_years));
    }
    if future_damages < 0.0 {
        return Err(EadError::NegativeFutureDamages(future_damages));
    }
    if rate < 0.0 {
        return Err(EadError::NegativeRate(rate));
    }

    let crf = capital_recovery_factor(rate, period_years)?;
    Ok(ead + future_damages * crf)
}

/// EAD for several named damage columns sharing one probability axis.
///
/// Results are returned in column order. The first column that fails
/// validation aborts the whole computation.
///
/// # Examples
///
/// ```
/// use hydroecon_models::flood::ead;
///
/// let probabilities = [0.5, 0.1, 0.01];
/// let columns = vec![
///     ("Structure".to_string(), vec![0.0, 100.0, 400.0]),
///     ("Contents".to_string(), vec![0.0, 50.0, 200.0]),
/// ];
/// let results = ead::compute_columns(&probabilities, &columns).unwrap();
/// assert_eq!(results[0].0, "Structure");
/// assert!(results[0].1 > results[1].1);
/// ```
pub fn compute_columns<S: AsRef<str>>(
    probabilities: &[f64],
    columns: &[(S, Vec<f64>)],
) -> Result<Vec<(String, f64)>, EadError> {
    columns
        .iter()
        .map(|(name, damages)| compute(probabilities, damages).map(|ead| (name.as_ref().to_string(), ead)))
        .collect()
}
