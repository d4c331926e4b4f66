//! HTTP API: server, routing, and request/response mapping.
//!
//! Thin adapter over the ledger engine. All invariants live below; this
//! crate only translates JSON in and out and maps errors to status codes.

pub mod app;
