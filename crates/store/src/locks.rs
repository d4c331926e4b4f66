//! Per-account exclusive locks for the read-check-append critical section.
//!
//! The no-overdraft invariant depends on serializing "fold the balance, then
//! conditionally append" per account: two concurrent withdrawals must not
//! both observe sufficient funds. Readers take no locks — committed entries
//! are immutable — only the check-then-append writers do.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use finledger_core::AccountId;

/// Handle to one account's exclusive lock.
#[derive(Debug, Clone)]
pub struct AccountLock {
    account: AccountId,
    inner: Arc<Mutex<()>>,
}

impl AccountLock {
    /// Block until the account's critical section is free.
    ///
    /// A poisoned mutex is recovered rather than propagated: the guarded
    /// region holds no data of its own (the store is the source of truth),
    /// so a panicking earlier holder cannot have left partial state behind.
    pub fn acquire(&self) -> MutexGuard<'_, ()> {
        tracing::trace!(account = %self.account, "acquiring account lock");
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn account(&self) -> AccountId {
        self.account
    }
}

/// Registry handing out one lock per account, lazily.
#[derive(Debug, Default)]
pub struct AccountLocks {
    locks: Mutex<HashMap<AccountId, Arc<Mutex<()>>>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock guarding `account`'s read-check-append sequence.
    pub fn handle(&self, account: AccountId) -> AccountLock {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let inner = locks.entry(account).or_default().clone();
        AccountLock { account, inner }
    }

    /// Both locks for a two-account operation, in ascending `AccountId`
    /// order regardless of argument order.
    ///
    /// Callers must acquire them in the returned order; the fixed global
    /// order is what prevents two opposing transfers from deadlocking.
    pub fn ordered_pair(&self, a: AccountId, b: AccountId) -> (AccountLock, AccountLock) {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        (self.handle(first), self.handle(second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_account_yields_the_same_lock() {
        let locks = AccountLocks::new();
        let account = AccountId::new();

        let one = locks.handle(account);
        let two = locks.handle(account);
        assert!(Arc::ptr_eq(&one.inner, &two.inner));
    }

    #[test]
    fn pair_order_is_argument_order_independent() {
        let locks = AccountLocks::new();
        let a = AccountId::new();
        let b = AccountId::new();

        let (x1, x2) = locks.ordered_pair(a, b);
        let (y1, y2) = locks.ordered_pair(b, a);
        assert_eq!(x1.account(), y1.account());
        assert_eq!(x2.account(), y2.account());
        assert!(x1.account() <= x2.account());
    }

    #[test]
    fn lock_excludes_a_second_holder() {
        let locks = AccountLocks::new();
        let account = AccountId::new();

        let lock = locks.handle(account);
        let guard = lock.acquire();

        let second = locks.handle(account);
        assert!(second.inner.try_lock().is_err());
        drop(guard);
        assert!(second.inner.try_lock().is_ok());
    }
}
