//! Append-only ledger store boundary.
//!
//! This module defines an infrastructure-facing abstraction for appending and
//! reading per-account entry logs without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryLedgerStore;
pub use r#trait::{LedgerStore, StoreError};
