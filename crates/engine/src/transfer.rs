//! Transfer coordinator: two legs, one atomic unit.

use std::sync::Arc;

use rust_decimal::Decimal;

use finledger_core::{AccountId, DomainError};
use finledger_directory::AccountDirectory;
use finledger_ledger::{balance, EntryDraft, LedgerEntry};
use finledger_store::{AccountLocks, LedgerStore};

use crate::error::EngineResult;

/// Moves funds between two accounts as an all-or-nothing pair of entries.
///
/// The outgoing and incoming legs are appended through the store's paired
/// append, so a failure anywhere leaves neither visible. Both account locks
/// are held for the whole read-check-append sequence, acquired in ascending
/// id order so two opposing transfers cannot deadlock.
pub struct TransferCoordinator<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
    locks: Arc<AccountLocks>,
}

impl<S, D> TransferCoordinator<S, D>
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

    /// Execute a transfer; returns the sender-side (`TransferOut`) entry.
    pub fn transfer(
        &self,
        sender: AccountId,
        recipient: AccountId,
        amount: Decimal,
        description: &str,
    ) -> EngineResult<LedgerEntry> {
        // Draft construction rejects non-positive amounts, blank
        // descriptions and self-transfers before anything is touched.
        let outgoing = EntryDraft::transfer_out(sender, recipient, amount, description)?;
        let incoming = EntryDraft::transfer_in(recipient, sender, amount, description)?;

        if !self.directory.exists(sender) {
            return Err(DomainError::AccountNotFound.into());
        }
        if !self.directory.exists(recipient) {
            return Err(DomainError::AccountNotFound.into());
        }

        let (first, second) = self.locks.ordered_pair(sender, recipient);
        let _outer = first.acquire();
        let _inner = second.acquire();

        let sender_entries = self.store.entries_for(sender)?;
        if balance(&sender_entries) < amount {
            tracing::warn!(
                sender = %sender,
                recipient = %recipient,
                %amount,
                "transfer refused: insufficient funds"
            );
            return Err(DomainError::InsufficientFunds.into());
        }

        let (out_entry, in_entry) = self.store.append_transfer(outgoing, incoming)?;
        tracing::info!(
            sender = %sender,
            recipient = %recipient,
            out_entry = %out_entry.id,
            in_entry = %in_entry.id,
            %amount,
            "transfer committed"
        );
        Ok(out_entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use finledger_directory::InMemoryAccountDirectory;
    use finledger_ledger::EntryKind;
    use finledger_store::InMemoryLedgerStore;
    use rust_decimal_macros::dec;

    struct Fixture {
        coordinator: TransferCoordinator<InMemoryLedgerStore, InMemoryAccountDirectory>,
        directory: Arc<InMemoryAccountDirectory>,
        store: Arc<InMemoryLedgerStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryLedgerStore::new());
        let directory = Arc::new(InMemoryAccountDirectory::new());
        let locks = Arc::new(AccountLocks::new());
        Fixture {
            coordinator: TransferCoordinator::new(
                Arc::clone(&store),
                Arc::clone(&directory),
                locks,
            ),
            directory,
            store,
        }
    }

    fn seed(f: &Fixture, account: AccountId, amount: Decimal) {
        let draft = EntryDraft::deposit(account, amount, "seed").unwrap();
        f.store.append(draft).unwrap();
    }

    #[test]
    fn successful_transfer_creates_exactly_two_mirrored_entries() {
        let f = fixture();
        let sender = f.directory.register("alice").id;
        let recipient = f.directory.register("bob").id;
        seed(&f, sender, dec!(100));

        let out_entry = f
            .coordinator
            .transfer(sender, recipient, dec!(80), "rent")
            .unwrap();

        assert_eq!(out_entry.kind, EntryKind::TransferOut);
        assert_eq!(out_entry.owner_account, sender);
        assert_eq!(out_entry.counterparty_account, Some(recipient));

        let sender_log = f.store.entries_for(sender).unwrap();
        let recipient_log = f.store.entries_for(recipient).unwrap();
        assert_eq!(sender_log.len(), 2); // seed deposit + transfer out
        assert_eq!(recipient_log.len(), 1);

        let in_entry = &recipient_log[0];
        assert_eq!(in_entry.kind, EntryKind::TransferIn);
        assert_eq!(in_entry.amount, out_entry.amount);
        assert_eq!(in_entry.counterparty_account, Some(sender));

        assert_eq!(balance(&sender_log), dec!(20));
        assert_eq!(balance(&recipient_log), dec!(80));
    }

    #[test]
    fn failed_transfer_writes_zero_entries() {
        let f = fixture();
        let sender = f.directory.register("alice").id;
        let recipient = f.directory.register("bob").id;
        seed(&f, recipient, dec!(35));

        let err = f
            .coordinator
            .transfer(sender, recipient, dec!(80), "rent")
            .unwrap_err();

        assert_eq!(err, EngineError::Domain(DomainError::InsufficientFunds));
        assert!(f.store.entries_for(sender).unwrap().is_empty());
        // Recipient's prior balance is untouched.
        assert_eq!(balance(&f.store.entries_for(recipient).unwrap()), dec!(35));
    }

    #[test]
    fn missing_recipient_fails_before_any_write() {
        let f = fixture();
        let sender = f.directory.register("alice").id;
        seed(&f, sender, dec!(100));

        let err = f
            .coordinator
            .transfer(sender, AccountId::new(), dec!(10), "to nobody")
            .unwrap_err();

        assert_eq!(err, EngineError::Domain(DomainError::AccountNotFound));
        assert_eq!(f.store.entries_for(sender).unwrap().len(), 1);
    }

    #[test]
    fn missing_sender_fails_the_same_way() {
        let f = fixture();
        let recipient = f.directory.register("bob").id;

        let err = f
            .coordinator
            .transfer(AccountId::new(), recipient, dec!(10), "from nobody")
            .unwrap_err();

        assert_eq!(err, EngineError::Domain(DomainError::AccountNotFound));
    }

    #[test]
    fn self_transfer_is_invalid() {
        let f = fixture();
        let account = f.directory.register("alice").id;
        seed(&f, account, dec!(100));

        let err = f
            .coordinator
            .transfer(account, account, dec!(10), "round trip")
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::Domain(DomainError::InvalidOperation(_))
        ));
        assert_eq!(f.store.entries_for(account).unwrap().len(), 1);
    }

    #[test]
    fn transferring_the_exact_balance_succeeds() {
        let f = fixture();
        let sender = f.directory.register("alice").id;
        let recipient = f.directory.register("bob").id;
        seed(&f, sender, dec!(80));

        f.coordinator
            .transfer(sender, recipient, dec!(80), "everything")
            .unwrap();

        assert_eq!(balance(&f.store.entries_for(sender).unwrap()), dec!(0));
        assert_eq!(balance(&f.store.entries_for(recipient).unwrap()), dec!(80));
    }
}
