//! Session handlers
//!
//! Endpoints for login, access token refresh, and refresh token revocation.

use axum::{extract::State, Json};
use chirpy_service::{LoginRequest, LoginResponse, SessionService, TokenResponse};

use crate::extractors::{BearerToken, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with email and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = SessionService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange the refresh token in the Authorization header for an access token
///
/// POST /api/refresh
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> ApiResult<Json<TokenResponse>> {
    let service = SessionService::new(state.service_context());
    let response = service.refresh(&refresh_token).await?;
    Ok(Json(response))
}

/// Revoke the refresh token in the Authorization header
///
/// POST /api/revoke
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> ApiResult<NoContent> {
    let service = SessionService::new(state.service_context());
    service.revoke(&refresh_token).await?;
    Ok(NoContent)
}
