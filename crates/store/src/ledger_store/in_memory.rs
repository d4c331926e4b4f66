use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use finledger_core::{AccountId, EntryId};
use finledger_ledger::{EntryDraft, LedgerEntry};

use super::r#trait::{LedgerStore, StoreError};

/// In-memory append-only ledger store.
///
/// Intended for tests/dev and the single-process binary. Creation order per
/// account is the vector order; ids are UUIDv7 so they are time-ordered too.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    logs: RwLock<HashMap<AccountId, Vec<LedgerEntry>>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_guard(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<AccountId, Vec<LedgerEntry>>>, StoreError>
    {
        self.logs
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn append(&self, draft: EntryDraft) -> Result<LedgerEntry, StoreError> {
        let owner = draft.owner_account();
        let entry = draft.into_entry(EntryId::new(), Utc::now());

        let mut logs = self.write_guard()?;
        logs.entry(owner).or_default().push(entry.clone());

        tracing::debug!(account = %owner, entry = %entry.id, kind = %entry.kind, "entry appended");
        Ok(entry)
    }

    fn append_transfer(
        &self,
        outgoing: EntryDraft,
        incoming: EntryDraft,
    ) -> Result<(LedgerEntry, LedgerEntry), StoreError> {
        // Validate the pairing before touching the log; nothing below this
        // point can fail, so both legs land or neither does.
        if !outgoing.mirrors(&incoming) {
            return Err(StoreError::InvalidAppend(
                "transfer legs do not mirror each other".to_string(),
            ));
        }

        let sender = outgoing.owner_account();
        let recipient = incoming.owner_account();
        let at = Utc::now();
        let out_entry = outgoing.into_entry(EntryId::new(), at);
        let in_entry = incoming.into_entry(EntryId::new(), at);

        let mut logs = self.write_guard()?;
        logs.entry(sender).or_default().push(out_entry.clone());
        logs.entry(recipient).or_default().push(in_entry.clone());

        tracing::debug!(
            sender = %sender,
            recipient = %recipient,
            out_entry = %out_entry.id,
            in_entry = %in_entry.id,
            "transfer pair appended"
        );
        Ok((out_entry, in_entry))
    }

    fn entries_for(&self, account: AccountId) -> Result<Vec<LedgerEntry>, StoreError> {
        let logs = self
            .logs
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(logs.get(&account).cloned().unwrap_or_default())
    }

    fn entry_by_id(
        &self,
        account: AccountId,
        entry: EntryId,
    ) -> Result<Option<LedgerEntry>, StoreError> {
        let logs = self
            .logs
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(logs
            .get(&account)
            .and_then(|log| log.iter().find(|e| e.id == entry))
            .cloned())
    }
}
