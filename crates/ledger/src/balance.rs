//! Balance calculation: a pure fold over an account's entries.
//!
//! The current balance is never stored; it is always derived from the
//! append-only log, so there is a single source of truth and readers need no
//! locks (entries are immutable once committed).

use rust_decimal::Decimal;

use crate::entry::LedgerEntry;

/// Fold entries with the sign rule: deposits and incoming transfer legs add,
/// withdrawals and outgoing legs subtract.
///
/// Callers pass the full entry sequence of one account in creation order; the
/// fold itself is order-insensitive, the order matters for statement display.
pub fn balance(entries: &[LedgerEntry]) -> Decimal {
    entries.iter().fold(Decimal::ZERO, |acc, entry| {
        if entry.kind.is_credit() {
            acc + entry.amount
        } else {
            acc - entry.amount
        }
    })
}
