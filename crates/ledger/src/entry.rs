use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finledger_core::{AccountId, DomainError, Entity, EntryId};

/// Kind of a ledger entry — a closed, tagged set.
///
/// Direction is carried here, never by the sign of the amount. The two legs of
/// a transfer are distinct kinds so the pairing invariant (every `TransferOut`
/// has a matching `TransferIn` born in the same atomic unit) stays visible in
/// the data instead of being inferred from annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

impl EntryKind {
    /// Whether entries of this kind increase the owner's balance.
    pub fn is_credit(self) -> bool {
        matches!(self, EntryKind::Deposit | EntryKind::TransferIn)
    }

    /// Whether this kind is one side of a two-sided transfer.
    pub fn is_transfer_leg(self) -> bool {
        matches!(self, EntryKind::TransferOut | EntryKind::TransferIn)
    }
}

impl core::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            EntryKind::Deposit => "deposit",
            EntryKind::Withdraw => "withdraw",
            EntryKind::TransferOut => "transfer_out",
            EntryKind::TransferIn => "transfer_in",
        };
        f.write_str(s)
    }
}

/// One immutable record of a balance-affecting event.
///
/// Born exactly once (in the operation recorder or the transfer coordinator),
/// lives forever in the ledger store. There is no update path: `updated_at`
/// equals `created_at` and stays that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub owner_account: AccountId,
    /// The account on the other side of a transfer; `None` for plain
    /// deposits/withdrawals.
    pub counterparty_account: Option<AccountId>,
    pub kind: EntryKind,
    /// Strictly positive; the sign rule lives in [`EntryKind`].
    pub amount: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for LedgerEntry {
    type Id = EntryId;

    fn id(&self) -> EntryId {
        self.id
    }
}

/// A validated, not-yet-persisted ledger entry.
///
/// Construction is the validation boundary: a draft that exists is well-formed
/// (positive amount, non-blank description, counterparty present exactly for
/// transfer legs). The store assigns id and timestamps at append.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    owner_account: AccountId,
    counterparty_account: Option<AccountId>,
    kind: EntryKind,
    amount: Decimal,
    description: String,
}

impl EntryDraft {
    pub fn new(
        owner_account: AccountId,
        counterparty_account: Option<AccountId>,
        kind: EntryKind,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let description = description.into();

        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_operation("amount must be positive"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::invalid_operation("description must not be empty"));
        }
        match (kind.is_transfer_leg(), counterparty_account) {
            (true, None) => {
                return Err(DomainError::invalid_operation(
                    "transfer legs require a counterparty account",
                ));
            }
            (false, Some(_)) => {
                return Err(DomainError::invalid_operation(
                    "plain deposits/withdrawals carry no counterparty",
                ));
            }
            _ => {}
        }
        if counterparty_account == Some(owner_account) {
            return Err(DomainError::invalid_operation(
                "counterparty must differ from the owning account",
            ));
        }

        Ok(Self {
            owner_account,
            counterparty_account,
            kind,
            amount,
            description,
        })
    }

    pub fn deposit(
        owner: AccountId,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(owner, None, EntryKind::Deposit, amount, description)
    }

    pub fn withdraw(
        owner: AccountId,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(owner, None, EntryKind::Withdraw, amount, description)
    }

    pub fn transfer_out(
        sender: AccountId,
        recipient: AccountId,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            sender,
            Some(recipient),
            EntryKind::TransferOut,
            amount,
            description,
        )
    }

    pub fn transfer_in(
        recipient: AccountId,
        sender: AccountId,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            recipient,
            Some(sender),
            EntryKind::TransferIn,
            amount,
            description,
        )
    }

    pub fn owner_account(&self) -> AccountId {
        self.owner_account
    }

    pub fn counterparty_account(&self) -> Option<AccountId> {
        self.counterparty_account
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `self` and `other` are the two legs of one transfer: opposite
    /// kinds, mirrored account roles, equal amounts.
    pub fn mirrors(&self, other: &EntryDraft) -> bool {
        let kinds_pair = matches!(
            (self.kind, other.kind),
            (EntryKind::TransferOut, EntryKind::TransferIn)
                | (EntryKind::TransferIn, EntryKind::TransferOut)
        );

        kinds_pair
            && self.amount == other.amount
            && self.counterparty_account == Some(other.owner_account)
            && other.counterparty_account == Some(self.owner_account)
    }

    /// Materialize the draft into a persisted entry. Store-internal: only the
    /// ledger store calls this, at append time.
    pub fn into_entry(self, id: EntryId, at: DateTime<Utc>) -> LedgerEntry {
        LedgerEntry {
            id,
            owner_account: self.owner_account,
            counterparty_account: self.counterparty_account,
            kind: self.kind,
            amount: self.amount,
            description: self.description,
            created_at: at,
            updated_at: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account() -> AccountId {
        AccountId::new()
    }

    #[test]
    fn deposit_draft_is_valid() {
        let draft = EntryDraft::deposit(account(), dec!(100), "salary").unwrap();
        assert_eq!(draft.kind(), EntryKind::Deposit);
        assert_eq!(draft.counterparty_account(), None);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let err = EntryDraft::deposit(account(), dec!(0), "nothing").unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = EntryDraft::withdraw(account(), dec!(-5), "sneaky").unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = EntryDraft::deposit(account(), dec!(1), "   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn transfer_leg_without_counterparty_is_rejected() {
        let err =
            EntryDraft::new(account(), None, EntryKind::TransferOut, dec!(10), "rent").unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn plain_kind_with_counterparty_is_rejected() {
        let err = EntryDraft::new(
            account(),
            Some(account()),
            EntryKind::Deposit,
            dec!(10),
            "odd",
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn self_transfer_is_rejected() {
        let a = account();
        let err = EntryDraft::transfer_out(a, a, dec!(10), "to myself").unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn transfer_legs_mirror_each_other() {
        let sender = account();
        let recipient = account();
        let out = EntryDraft::transfer_out(sender, recipient, dec!(80), "rent").unwrap();
        let inc = EntryDraft::transfer_in(recipient, sender, dec!(80), "rent").unwrap();

        assert!(out.mirrors(&inc));
        assert!(inc.mirrors(&out));
    }

    #[test]
    fn mismatched_amounts_do_not_mirror() {
        let sender = account();
        let recipient = account();
        let out = EntryDraft::transfer_out(sender, recipient, dec!(80), "rent").unwrap();
        let inc = EntryDraft::transfer_in(recipient, sender, dec!(79), "rent").unwrap();

        assert!(!out.mirrors(&inc));
    }

    #[test]
    fn two_deposits_never_mirror() {
        let a = account();
        let b = account();
        let one = EntryDraft::deposit(a, dec!(10), "a").unwrap();
        let two = EntryDraft::deposit(b, dec!(10), "b").unwrap();

        assert!(!one.mirrors(&two));
    }

    #[test]
    fn materialized_entry_keeps_draft_fields_and_timestamps() {
        let owner = account();
        let draft = EntryDraft::deposit(owner, dec!(42.50), "paycheck").unwrap();
        let id = EntryId::new();
        let at = chrono::Utc::now();

        let entry = draft.into_entry(id, at);
        assert_eq!(entry.id, id);
        assert_eq!(entry.owner_account, owner);
        assert_eq!(entry.amount, dec!(42.50));
        assert_eq!(entry.created_at, at);
        assert_eq!(entry.updated_at, at);
    }
}
