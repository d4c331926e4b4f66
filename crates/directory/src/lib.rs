//! Account directory: who exists.
//!
//! The ledger engine never creates or deletes accounts; it only asks this
//! directory whether an identifier resolves. Registration lives here too so
//! the adapter layer has somewhere to mint accounts from.

pub mod account;

pub use account::{Account, AccountDirectory, InMemoryAccountDirectory};
