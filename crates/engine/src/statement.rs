//! Statement queries: derived balance and single-entry lookup.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use finledger_core::{AccountId, DomainError, EntryId};
use finledger_directory::AccountDirectory;
use finledger_ledger::{balance, LedgerEntry};
use finledger_store::LedgerStore;

use crate::error::EngineResult;

/// Balance plus the ordered entry sequence it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceStatement {
    pub balance: Decimal,
    pub entries: Vec<LedgerEntry>,
}

/// Read-only lookups. Takes no locks: committed entries are immutable, so a
/// reader can only ever observe a consistent prefix of the log. The result
/// may be stale the instant another operation commits.
pub struct StatementQuery<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
}

impl<S, D> StatementQuery<S, D>
where
    S: LedgerStore,
    D: AccountDirectory,
{
    pub fn new(store: Arc<S>, directory: Arc<D>) -> Self {
        Self { store, directory }
    }

    /// Current balance and full history for `account`, in creation order.
    pub fn get_balance(&self, account: AccountId) -> EngineResult<BalanceStatement> {
        if !self.directory.exists(account) {
            return Err(DomainError::AccountNotFound.into());
        }

        let entries = self.store.entries_for(account)?;
        Ok(BalanceStatement {
            balance: balance(&entries),
            entries,
        })
    }

    /// One entry by id, visible only to its owner.
    ///
    /// An entry owned by another account reports `EntryNotFound`, exactly
    /// like a nonexistent id — not a permission error.
    pub fn get_entry(&self, account: AccountId, entry: EntryId) -> EngineResult<LedgerEntry> {
        if !self.directory.exists(account) {
            return Err(DomainError::AccountNotFound.into());
        }

        self.store
            .entry_by_id(account, entry)?
            .ok_or_else(|| DomainError::EntryNotFound.into())
    }
}
