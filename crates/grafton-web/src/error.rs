//! HTTP mapping of the error taxonomy.
//!
//! Validation and binding failures are the client's fault (400), store
//! failures are ours (500), and an empty result for a targeted operation is
//! a plain 404.

use axum::http::StatusCode;
use grafton_cypher::CypherError;
use grafton_store::StoreError;

/// Handler error: status plus a descriptive message.
pub type ApiError = (StatusCode, String);

pub fn compile_error(err: CypherError) -> ApiError {
    (StatusCode::BAD_REQUEST, err.to_string())
}

pub fn store_error(err: StoreError) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub fn bad_request(msg: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, msg.into())
}

pub fn not_found(what: &str) -> ApiError {
    (StatusCode::NOT_FOUND, format!("{what} not found"))
}
