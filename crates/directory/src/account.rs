use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finledger_core::{AccountId, Entity};

/// An account as the directory sees it: identity plus display metadata.
///
/// The ledger core only ever needs the identity; `name` exists for the
/// adapter layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

/// Existence oracle consumed by the ledger engine.
///
/// Deliberately narrow: the engine asks "does this account exist" before any
/// balance read or append, nothing more. The directory never calls back into
/// the engine.
pub trait AccountDirectory: Send + Sync {
    fn exists(&self, account: AccountId) -> bool;

    fn find(&self, account: AccountId) -> Option<Account>;
}

/// In-memory directory.
///
/// Intended for tests/dev and the single-process binary.
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new account. Directory-owned: this is the only birth place of
    /// account identifiers in the process.
    pub fn register(&self, name: impl Into<String>) -> Account {
        let account = Account {
            id: AccountId::new(),
            name: name.into(),
            created_at: Utc::now(),
        };

        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(account.id, account.clone());

        account
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn exists(&self, account: AccountId) -> bool {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&account)
    }

    fn find(&self, account: AccountId) -> Option<Account> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&account)
            .cloned()
    }
}
