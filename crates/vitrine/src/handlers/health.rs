//! Health check endpoint.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Everything the server renders from is loaded
/// before it starts listening, so there is nothing further to check.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
