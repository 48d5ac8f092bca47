//! `Authorization: Bearer <token>` parsing

const BEARER_PREFIX: &str = "Bearer ";

/// Why a bearer token could not be extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Authorization header missing")]
    Missing,

    #[error("Authorization header is not a bearer credential")]
    WrongScheme,

    #[error("Bearer token is empty")]
    Empty,
}

/// Extract the token from an `Authorization` header value
///
/// The value must start with `"Bearer "`; the remainder is trimmed and must
/// not be empty.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, BearerError> {
    let value = header.ok_or(BearerError::Missing)?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::WrongScheme)?
        .trim();

    if token.is_empty() {
        return Err(BearerError::Empty);
    }

    Ok(token)
}
