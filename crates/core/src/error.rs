//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both kinds are deterministic, caller-correctable input problems detected
/// before any mutation. A failing operation leaves state exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A money amount failed to parse or validate (e.g. malformed price string).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A quantity outside the representable range (zero on add, overflow on merge).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity(quantity)
    }
}
