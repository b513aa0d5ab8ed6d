//! Health check handler.

use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse};

/// GET /healthcheck
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
