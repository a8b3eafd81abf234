//! Reservoir storage reallocation cost.

use super::FinanceError;

/// Cost attributable to reallocated reservoir storage.
///
/// ```text
/// (total_cost − storage_price) · reallocated / total_usable
/// ```
///
/// # Errors
///
/// `FinanceError::InvalidStorage` when `total_usable_storage <= 0`.
///
/// # Examples
///
/// ```
/// use hydroecon_models::finance::storage_reallocation_cost;
///
/// let cost = storage_reallocation_cost(10_000.0, 2_000.0, 250.0, 1_000.0).unwrap();
/// assert_eq!(cost, 2_000.0);
/// ```
pub fn storage_reallocation_cost(
    total_cost: f64,
    storage_price: f64,
    storage_reallocated: f64,
    total_usable_storage: f64,
) -> Result<f64, FinanceError> {
    // Negated comparison so NaN storage is rejected too
    if !(total_usable_storage > 0.0) {
        return Err(FinanceError::InvalidStorage {
            storage: total_usable_storage,
        });
    }

    Ok((total_cost - storage_price) * storage_reallocated / total_usable_storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_storage_rejected() {
        assert!(matches!(
            storage_reallocation_cost(1.0, 0.0, 1.0, 0.0),
            Err(FinanceError::InvalidStorage { .. })
        ));
        assert!(storage_reallocation_cost(1.0, 0.0, 1.0, -5.0).is_err());
        assert!(storage_reallocation_cost(1.0, 0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_price_above_cost_is_negative() {
        let cost = storage_reallocation_cost(1_000.0, 1_500.0, 10.0, 100.0).unwrap();
        assert_eq!(cost, -50.0);
    }
}
