//! User handlers

use axum::{extract::State, Json};
use chirpy_service::{CredentialsRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CredentialsRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Replace the caller's email and password
///
/// PUT /api/users
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CredentialsRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_credentials(auth.user_id, request).await?;
    Ok(Json(response))
}
