//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// Chirp ID from the `:chirp_id` path segment
///
/// A segment that is not a UUID is rejected with 400.
#[derive(Debug, Clone, Copy)]
pub struct ChirpIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ChirpIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Uuid::parse_str(&raw)
            .map(ChirpIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid chirp_id format"))
    }
}
