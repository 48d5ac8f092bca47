//! JSON body extractors
//!
//! `JsonBody` maps axum's JSON rejections onto `ApiError`; `ValidatedJson`
//! additionally runs the `validator` rules.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body with uniform error responses
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.body_text()),
            JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.body_text()),
            _ => ApiError::invalid_body("Invalid JSON body"),
        })?;

        Ok(JsonBody(value))
    }
}

/// Validated JSON extractor
///
/// Extracts a JSON body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
