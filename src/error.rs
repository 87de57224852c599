//! Crate-level error type for the rental domain rules.

/// Domain-level error produced by rule checks and lookups.
///
/// Two kinds are distinguished so the surrounding request layer can map them
/// to distinct client-visible conditions (typically 404 vs 400):
/// [`DomainError::NotFound`] for a dangling entity reference,
/// [`DomainError::BusinessRule`] for a violated precondition. Neither is
/// retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A referenced entity identifier does not exist in its owning collection.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A discount code (including the fallback code) resolves to nothing.
    #[error("discount with code {code:?} not found")]
    DiscountNotFound { code: String },

    /// A domain precondition is violated, with a human-readable message.
    #[error("{0}")]
    BusinessRule(String),
}

/// Convenience alias for rule-check return values.
pub type DomainResult<T> = Result<T, DomainError>;
