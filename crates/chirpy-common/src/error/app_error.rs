//! Application error types
//!
//! Unified error handling for the entire application. Authentication
//! failures of any cause collapse into [`AppError::Unauthorized`] (login) or
//! [`AppError::Unauthenticated`] (tokens) so responses never reveal which
//! check failed.

use chirpy_core::DomainError;
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Incorrect email or password")]
    Unauthorized,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden")]
    Forbidden,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Infrastructure errors; the detail is logged, never rendered
    #[error("Internal server error")]
    Hashing(String),

    #[error("Internal server error")]
    Persistence(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::Unauthorized | Self::Unauthenticated => 401,

            // 403 Forbidden
            Self::Forbidden => 403,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 500 Internal Server Error
            Self::Hashing(_) | Self::Persistence(_) | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => {
                if e.is_session_rejection() {
                    401
                } else if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Hashing(_) | Self::Persistence(_) | Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), 401);
        assert_eq!(AppError::Unauthenticated.status_code(), 401);
        assert_eq!(AppError::Forbidden.status_code(), 403);
        assert_eq!(AppError::NotFound("chirp".to_string()).status_code(), 404);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Persistence("down".to_string()).status_code(), 500);
        assert_eq!(AppError::Hashing("bad".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(AppError::Domain(DomainError::RefreshTokenRevoked).status_code(), 401);
        assert_eq!(AppError::Domain(DomainError::NotChirpAuthor).status_code(), 403);
        assert_eq!(AppError::Domain(DomainError::EmptyChirp).status_code(), 400);
        assert_eq!(AppError::Domain(DomainError::EmailAlreadyExists).status_code(), 409);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Unauthorized.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::Unauthenticated.error_code(), "UNAUTHENTICATED");
        assert_eq!(AppError::NotFound("user".to_string()).error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_infrastructure_detail_not_rendered() {
        let err = AppError::Persistence("connection refused to 10.0.0.3".to_string());
        assert_eq!(err.to_string(), "Internal server error");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::Unauthorized.is_client_error());
        assert!(AppError::NotFound("test".to_string()).is_client_error());
        assert!(!AppError::Persistence("test".to_string()).is_client_error());
    }

    #[test]
    fn test_error_response() {
        let err = AppError::NotFound("chirp".to_string());
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Resource not found: chirp");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_helper_methods() {
        let err = AppError::not_found("chirp 123");
        assert_eq!(err.to_string(), "Resource not found: chirp 123");

        let err = AppError::validation("email is required");
        assert_eq!(err.to_string(), "Validation error: email is required");
    }
}
