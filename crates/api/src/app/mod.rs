//! HTTP application wiring (axum router + service construction).
//!
//! Layout:
//! - `services.rs`: explicit construction of the engine over the in-memory
//!   store/directory (no global wiring, everything passed in)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());
    routes::router().layer(Extension(services))
}
