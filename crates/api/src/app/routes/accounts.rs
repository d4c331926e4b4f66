use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use finledger_directory::AccountDirectory;

use crate::app::routes::common;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/:account_id", get(get_account))
        .route("/accounts/:account_id/balance", get(get_balance))
}

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateAccountRequest>,
) -> axum::response::Response {
    if body.name.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_operation",
            "account name must not be empty",
        );
    }

    let account = services.directory.register(body.name.trim());
    tracing::info!(account = %account.id, "account registered");

    (StatusCode::CREATED, Json(dto::account_to_json(account))).into_response()
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Path(account_id): Path<String>,
) -> axum::response::Response {
    let account = match common::parse_account_id(&account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.directory.find(account) {
        Some(account) => (StatusCode::OK, Json(dto::account_to_json(account))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "account_not_found", "account not found"),
    }
}

pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    Path(account_id): Path<String>,
) -> axum::response::Response {
    let account = match common::parse_account_id(&account_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.statements.get_balance(account) {
        Ok(statement) => (StatusCode::OK, Json(dto::statement_to_json(&statement))).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}
