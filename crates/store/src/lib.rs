//! Ledger store boundary: durable, ordered, append-only entry log.

pub mod ledger_store;
pub mod locks;

pub use ledger_store::{InMemoryLedgerStore, LedgerStore, StoreError};
pub use locks::{AccountLock, AccountLocks};
