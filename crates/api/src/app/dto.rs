use rust_decimal::Decimal;
use serde::Deserialize;

use finledger_directory::Account;
use finledger_engine::BalanceStatement;
use finledger_ledger::LedgerEntry;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
}

/// Body shared by deposit, withdraw and transfer requests.
///
/// Amounts travel as JSON strings (`"42.50"`) — decimal in, decimal out, no
/// float rounding on the wire.
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    pub amount: Decimal,
    pub description: String,
}

// -------------------------
// Response mapping
// -------------------------

pub fn account_to_json(account: Account) -> serde_json::Value {
    serde_json::json!({
        "id": account.id,
        "name": account.name,
        "created_at": account.created_at,
    })
}

pub fn entry_to_json(entry: &LedgerEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "owner_account": entry.owner_account,
        "counterparty_account": entry.counterparty_account,
        "kind": entry.kind,
        "amount": entry.amount,
        "description": entry.description,
        "created_at": entry.created_at,
        "updated_at": entry.updated_at,
    })
}

pub fn statement_to_json(statement: &BalanceStatement) -> serde_json::Value {
    serde_json::json!({
        "balance": statement.balance,
        "statement": statement.entries.iter().map(entry_to_json).collect::<Vec<_>>(),
    })
}
