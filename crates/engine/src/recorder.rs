//! Operation recorder: one validated append under the funds guard.

use std::sync::Arc;

use rust_decimal::Decimal;

use finledger_core::{AccountId, DomainError};
use finledger_directory::AccountDirectory;
use finledger_ledger::{balance, EntryDraft, EntryKind, LedgerEntry};
use finledger_store::{AccountLocks, LedgerStore};

use crate::error::EngineResult;

/// Records single-sided operations (deposits and withdrawals).
///
/// Transfer legs are refused here; they are born only in the transfer
/// coordinator, which is what keeps the leg-pairing invariant machine-checked.
pub struct OperationRecorder<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
    locks: Arc<AccountLocks>,
}

impl<S, D> OperationRecorder<S, D>
where
    S: LedgerStore,
    D: AccountDirectory,
{
    pub fn new(store: Arc<S>, directory: Arc<D>, locks: Arc<AccountLocks>) -> Self {
        Self {
            store,
            directory,
            locks,
        }
    }

    /// Validate and append one deposit or withdrawal.
    ///
    /// For withdrawals, the balance fold and the conditional append run under
    /// the account's exclusive lock: two concurrent withdrawals can never
    /// both observe sufficient funds.
    pub fn record(
        &self,
        account: AccountId,
        kind: EntryKind,
        amount: Decimal,
        description: &str,
    ) -> EngineResult<LedgerEntry> {
        if kind.is_transfer_leg() {
            return Err(DomainError::invalid_operation(
                "transfer legs are recorded by the transfer coordinator",
            )
            .into());
        }

        let draft = EntryDraft::new(account, None, kind, amount, description)?;

        if !self.directory.exists(account) {
            return Err(DomainError::AccountNotFound.into());
        }

        let lock = self.locks.handle(account);
        let _guard = lock.acquire();

        if kind == EntryKind::Withdraw {
            let entries = self.store.entries_for(account)?;
            if balance(&entries) < amount {
                tracing::warn!(account = %account, %amount, "withdrawal refused: insufficient funds");
                return Err(DomainError::InsufficientFunds.into());
            }
        }

        let entry = self.store.append(draft)?;
        tracing::info!(account = %account, entry = %entry.id, %kind, %amount, "operation recorded");
        Ok(entry)
    }
}
