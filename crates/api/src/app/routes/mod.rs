use axum::routing::get;
use axum::Router;

pub mod accounts;
pub mod common;
pub mod statements;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(accounts::router())
        .merge(statements::router())
}
