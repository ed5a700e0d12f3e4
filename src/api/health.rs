//! Health check endpoint

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::api::types::Json;

/// Liveness response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - returns 200 while the process is up
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
