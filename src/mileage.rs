//! Odometer rule for rental returns.

use crate::error::{DomainError, DomainResult};

/// Enforce that a vehicle cannot come back with fewer kilometers than it
/// left with.
pub fn check_mileage(current_kilometer: u32, end_kilometer: u32) -> DomainResult<()> {
    if end_kilometer < current_kilometer {
        return Err(DomainError::BusinessRule(
            "the returned kilometer cannot be lower than the delivered kilometer".to_string(),
        ));
    }
    Ok(())
}
