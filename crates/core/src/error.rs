//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain outcomes. All of these are
/// expected and recoverable by the caller; infrastructure failures (lock loss,
/// store unavailability) belong to the store layer, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced account identifier does not resolve in the directory.
    #[error("account not found")]
    AccountNotFound,

    /// A withdrawal or transfer would drive the balance below zero.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// A ledger entry id is not visible to the requesting account.
    ///
    /// An entry owned by a different account is reported the same way as a
    /// missing one: visibility is scoped to the owner and nothing else leaks.
    #[error("ledger entry not found")]
    EntryNotFound,

    /// Malformed operation input (non-positive amount, blank description, ...),
    /// rejected before any storage is touched.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// An identifier was invalid (e.g. parse failure at the boundary).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
