//! Authentication extractors
//!
//! `AuthUser` validates the access token in the Authorization header;
//! `BearerToken` only lifts the raw token out for the refresh endpoints.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use chirpy_common::extract_bearer_token;
use chirpy_core::UserId;
use chirpy_service::SessionService;

use crate::response::ApiError;
use crate::state::AppState;

fn authorization_header(parts: &Parts) -> Option<&str> {
    // A non-ASCII value can never carry a valid token
    parts
        .headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default())
}

/// Authenticated user extracted from the access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let user_id = SessionService::new(app_state.service_context())
            .authorize_request(authorization_header(parts))?;

        Ok(AuthUser::new(user_id))
    }
}

/// Raw bearer token, used to carry refresh tokens
#[derive(Clone)]
pub struct BearerToken(pub String);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(authorization_header(parts)).map_err(|e| {
            tracing::warn!(cause = %e, "Request rejected: no usable bearer token");
            ApiError::unauthenticated()
        })?;

        Ok(BearerToken(token.to_string()))
    }
}
