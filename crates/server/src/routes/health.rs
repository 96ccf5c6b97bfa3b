//! Health check endpoint.

use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// Liveness probe. Returns 200 with a small JSON body.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
