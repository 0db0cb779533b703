//! Health check endpoint.

use axum::Json;
use common::HealthStatus;

/// GET /health — returns the fixed health payload.
pub async fn check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
