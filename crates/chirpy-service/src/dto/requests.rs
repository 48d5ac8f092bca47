//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Unknown fields are ignored, including the legacy `expires_in_seconds`
//! login hint.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// User Requests
// ============================================================================

/// Registration request; also used to replace the caller's credentials
#[derive(Clone, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Chirp Requests
// ============================================================================

/// Create chirp request
///
/// Length and emptiness are enforced by the chirp moderation rules, which
/// count characters rather than bytes.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChirpRequest {
    #[serde(default)]
    pub body: String,
}
