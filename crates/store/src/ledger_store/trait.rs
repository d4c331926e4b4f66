use thiserror::Error;

use finledger_core::{AccountId, EntryId};
use finledger_ledger::{EntryDraft, LedgerEntry};

/// Storage-layer failure.
///
/// Deliberately distinct from the domain error taxonomy: everything here is
/// the transient/transport category. The calling layer may retry the whole
/// logical operation (a fresh operation, never a replayed write); the engine
/// itself never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The append violated a store-level structural rule (e.g. a transfer
    /// batch whose legs do not mirror each other).
    #[error("invalid append: {0}")]
    InvalidAppend(String),

    /// The store could not serve the request (lock poisoned, backend down,
    /// transaction aborted).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable, ordered log of ledger entries keyed by owning account.
///
/// Append-only: the store assigns id and timestamps at append and nothing is
/// ever mutated or deleted afterwards. Reads return entries in creation order.
pub trait LedgerStore: Send + Sync {
    /// Persist one entry. Returns the entry as stored (with id/timestamps).
    fn append(&self, draft: EntryDraft) -> Result<LedgerEntry, StoreError>;

    /// Persist the two legs of a transfer as one atomic unit.
    ///
    /// Either both entries become visible to subsequent reads or neither
    /// does; a failure between the legs must not leak a half-transfer. The
    /// store checks that the drafts mirror each other before writing
    /// anything.
    fn append_transfer(
        &self,
        outgoing: EntryDraft,
        incoming: EntryDraft,
    ) -> Result<(LedgerEntry, LedgerEntry), StoreError>;

    /// All entries owned by `account`, in creation order.
    fn entries_for(&self, account: AccountId) -> Result<Vec<LedgerEntry>, StoreError>;

    /// One entry by id, scoped to its owning account.
    ///
    /// Returns `None` both when the id is unknown and when the entry belongs
    /// to a different account; ownership scoping happens here, not above.
    fn entry_by_id(
        &self,
        account: AccountId,
        entry: EntryId,
    ) -> Result<Option<LedgerEntry>, StoreError>;
}
