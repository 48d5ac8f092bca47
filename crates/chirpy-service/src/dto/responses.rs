//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// User Responses
// ============================================================================

/// Public profile of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

// ============================================================================
// Session Responses
// ============================================================================

/// Successful login: the user profile plus both tokens
#[derive(Clone, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    pub fn new(user: UserResponse, token: String, refresh_token: String) -> Self {
        Self {
            user,
            token,
            refresh_token,
        }
    }
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Freshly issued access token
#[derive(Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse").finish_non_exhaustive()
    }
}

// ============================================================================
// Chirp Responses
// ============================================================================

/// A stored chirp
#[derive(Debug, Clone, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
