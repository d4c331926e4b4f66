use axum::http::StatusCode;

use finledger_core::{AccountId, EntryId};

use crate::app::errors;

/// Parse a path segment into an account id, or a ready-made 400 response.
pub fn parse_account_id(raw: &str) -> Result<AccountId, axum::response::Response> {
    raw.parse::<AccountId>()
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}

pub fn parse_entry_id(raw: &str) -> Result<EntryId, axum::response::Response> {
    raw.parse::<EntryId>()
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}
