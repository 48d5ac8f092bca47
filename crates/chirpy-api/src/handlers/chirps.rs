//! Chirp handlers
//!
//! Endpoints for posting, reading and deleting chirps.

use axum::{extract::State, Json};
use chirpy_service::{ChirpResponse, ChirpService, CreateChirpRequest};

use crate::extractors::{AuthUser, ChirpIdPath, JsonBody};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post a chirp as the authenticated user
///
/// POST /api/chirps
pub async fn create_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<CreateChirpRequest>,
) -> ApiResult<Created<Json<ChirpResponse>>> {
    let service = ChirpService::new(state.service_context());
    let chirp = service.create(auth.user_id, request).await?;
    Ok(Created(Json(chirp)))
}

/// List all chirps, oldest first
///
/// GET /api/chirps
pub async fn list_chirps(State(state): State<AppState>) -> ApiResult<Json<Vec<ChirpResponse>>> {
    let service = ChirpService::new(state.service_context());
    let chirps = service.list().await?;
    Ok(Json(chirps))
}

/// Get a chirp by ID
///
/// GET /api/chirps/{chirp_id}
pub async fn get_chirp(
    State(state): State<AppState>,
    ChirpIdPath(chirp_id): ChirpIdPath,
) -> ApiResult<Json<ChirpResponse>> {
    let service = ChirpService::new(state.service_context());
    let chirp = service.get(chirp_id).await?;
    Ok(Json(chirp))
}

/// Delete one of the caller's chirps
///
/// DELETE /api/chirps/{chirp_id}
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    ChirpIdPath(chirp_id): ChirpIdPath,
) -> ApiResult<NoContent> {
    let service = ChirpService::new(state.service_context());
    service.delete(auth.user_id, chirp_id).await?;
    Ok(NoContent)
}
