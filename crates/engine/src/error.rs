//! Engine error: domain outcomes vs transient store failures.

use thiserror::Error;

use finledger_core::DomainError;
use finledger_store::StoreError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Failure of an engine operation.
///
/// The split mirrors the retry contract: domain outcomes are final and
/// propagate unchanged to the caller; store failures are the transient
/// category the caller may retry as a fresh logical operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::Store(_))
    }
}
