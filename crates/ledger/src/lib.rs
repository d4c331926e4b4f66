//! Ledger domain (append-only signed operations, derived balances).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod balance;
pub mod entry;

pub use balance::balance;
pub use entry::{EntryDraft, EntryKind, LedgerEntry};
