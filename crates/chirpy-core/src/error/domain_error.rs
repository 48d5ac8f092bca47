//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Chirp not found: {0}")]
    ChirpNotFound(Uuid),

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Chirp body is required")]
    EmptyChirp,

    #[error("Chirp is too long: max {max} characters")]
    ChirpTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not chirp author")]
    NotChirpAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Refresh token already exists")]
    RefreshTokenExists,

    // =========================================================================
    // Session Rules
    // =========================================================================
    #[error("Refresh token revoked")]
    RefreshTokenRevoked,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChirpNotFound(_) => "UNKNOWN_CHIRP",
            Self::RefreshTokenNotFound => "UNKNOWN_REFRESH_TOKEN",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmptyChirp => "EMPTY_CHIRP",
            Self::ChirpTooLong { .. } => "CHIRP_TOO_LONG",

            Self::NotChirpAuthor => "NOT_CHIRP_AUTHOR",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RefreshTokenExists => "REFRESH_TOKEN_EXISTS",

            Self::RefreshTokenRevoked => "REFRESH_TOKEN_REVOKED",
            Self::RefreshTokenExpired => "REFRESH_TOKEN_EXPIRED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ChirpNotFound(_) | Self::RefreshTokenNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::EmptyChirp
                | Self::ChirpTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotChirpAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::RefreshTokenExists)
    }

    /// Check if this describes an unusable refresh token
    pub fn is_session_rejection(&self) -> bool {
        matches!(
            self,
            Self::RefreshTokenNotFound | Self::RefreshTokenRevoked | Self::RefreshTokenExpired
        )
    }
}
