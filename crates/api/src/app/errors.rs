use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use finledger_core::DomainError;
use finledger_engine::EngineError;

/// Map an engine failure to a caller-visible response.
///
/// Domain outcomes keep their identity (the caller can react to each);
/// transient store failures collapse to 500 and the caller decides whether
/// to retry the whole logical operation.
pub fn engine_error_to_response(err: EngineError) -> axum::response::Response {
    match err {
        EngineError::Domain(DomainError::AccountNotFound) => {
            json_error(StatusCode::NOT_FOUND, "account_not_found", "account not found")
        }
        EngineError::Domain(DomainError::EntryNotFound) => {
            json_error(StatusCode::NOT_FOUND, "entry_not_found", "ledger entry not found")
        }
        EngineError::Domain(DomainError::InsufficientFunds) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "insufficient_funds",
            "insufficient funds",
        ),
        EngineError::Domain(DomainError::InvalidOperation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_operation", msg)
        }
        EngineError::Domain(DomainError::InvalidId(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
        }
        EngineError::Store(e) => {
            tracing::error!(error = %e, "store failure surfaced to the API");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
