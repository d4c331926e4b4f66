//! Ledger engine: the operations the adapter layer calls.
//!
//! Three services over the same collaborators (ledger store, account
//! directory, per-account locks), all taken by explicit construction:
//!
//! - [`OperationRecorder`] — validate and append one signed operation
//!   (deposit or withdraw) under the funds-sufficiency guard.
//! - [`TransferCoordinator`] — compose a withdrawal and a deposit into one
//!   atomic two-legged transfer, or fail entirely.
//! - [`StatementQuery`] — read-only: derived balance with full history, and
//!   single-entry lookup scoped to the owner.
//!
//! The engine owns no threads and does no background work; every call is a
//! bounded request/response unit.

pub mod error;
pub mod recorder;
pub mod statement;
pub mod transfer;

pub use error::{EngineError, EngineResult};
pub use recorder::OperationRecorder;
pub use statement::{BalanceStatement, StatementQuery};
pub use transfer::TransferCoordinator;
