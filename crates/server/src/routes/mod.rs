//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `analyze`: Article analysis (single and batch)

pub mod analyze;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /), no authentication required.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Veritext Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/analyze",
            "/api/v1/analyze/batch",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler for undefined routes
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
