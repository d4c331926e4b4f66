use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use finledger_ledger::EntryKind;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/accounts/:account_id/deposit", post(deposit))
        .route("/accounts/:account_id/withdraw", post(withdraw))
        .route(
            "/accounts/:account_id/transfer/:recipient_id",
            post(transfer),
        )
        .route(
            "/accounts/:account_id/statements/:statement_id",
            get(get_statement),
        )
}

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(account_id): Path<String>,
    Json(body): Json<dto::OperationRequest>,
) -> axum::response::Response {
    record(&services, &account_id, EntryKind::Deposit, body)
}

pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Path(account_id): Path<String>,
    Json(body): Json<dto::OperationRequest>,
) -> axum::response::Response {
    record(&services, &account_id, EntryKind::Withdraw, body)
}

/// Deliberately a plain sync call from the async handlers: the store boundary
/// is sync and in-memory, so the account-lock wait is a short in-process
/// mutex hold, not IO worth `spawn_blocking`.
fn record(
    services: &AppServices,
    account_id: &str,
    kind: EntryKind,
    body: dto::OperationRequest,
) -> axum::response::Response {
    let account = match common::parse_account_id(account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services
        .recorder
        .record(account, kind, body.amount, &body.description)
    {
        Ok(entry) => (StatusCode::CREATED, Json(dto::entry_to_json(&entry))).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Path((account_id, recipient_id)): Path<(String, String)>,
    Json(body): Json<dto::OperationRequest>,
) -> axum::response::Response {
    let sender = match common::parse_account_id(&account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let recipient = match common::parse_account_id(&recipient_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services
        .coordinator
        .transfer(sender, recipient, body.amount, &body.description)
    {
        Ok(entry) => (StatusCode::CREATED, Json(dto::entry_to_json(&entry))).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Path((account_id, statement_id)): Path<(String, String)>,
) -> axum::response::Response {
    let account = match common::parse_account_id(&account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let entry = match common::parse_entry_id(&statement_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.statements.get_entry(account, entry) {
        Ok(entry) => (StatusCode::OK, Json(dto::entry_to_json(&entry))).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}
