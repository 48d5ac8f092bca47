//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use chirpy_service::ReadinessResponse;

use crate::state::AppState;

/// Liveness probe
///
/// GET /api/healthz
pub async fn healthz() -> &'static str {
    "OK"
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    // Without a pool the in-memory store is in use and always available
    let db_healthy = match state.service_context().pool() {
        Some(pool) => chirpy_db::ping(pool).await.is_ok(),
        None => true,
    };

    let response = ReadinessResponse::ready(db_healthy);
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
