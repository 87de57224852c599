//! Discount model and lookup collaborator.

use crate::error::{DomainError, DomainResult};

/// Code of the discount applied when a rental names no code, an empty code,
/// or a code that resolves to nothing.
pub const DEFAULT_DISCOUNT_CODE: &str = "DEFAULT";

/// A named percentage markdown applied to a rental's price.
///
/// Immutable once loaded; looked up by code through a [`DiscountDirectory`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Discount {
    pub code: String,
    /// Markdown in percent, `0.0..=100.0`.
    pub percentage: f64,
}

impl Discount {
    pub fn new(code: impl Into<String>, percentage: f64) -> Self {
        Self {
            code: code.into(),
            percentage,
        }
    }
}

/// Lookup collaborator resolving a discount code to its record.
///
/// Returns `None` for unknown codes; fallback handling lives in the
/// validator, not here.
pub trait DiscountDirectory: Send + Sync {
    fn find_by_code(&self, code: &str) -> Option<Discount>;
}

/// Validate that a discount percentage falls within `[0.0, 100.0]`.
pub fn validate_percentage(percentage: f64) -> DomainResult<()> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(DomainError::BusinessRule(format!(
            "discount percentage must be between 0 and 100, got {percentage}"
        )));
    }
    Ok(())
}
