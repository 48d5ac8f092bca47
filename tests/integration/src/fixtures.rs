//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Email and password, used for registration, login and updates
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Credentials with an email unique to this test run
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let nanos = Utc::now().timestamp_subsec_nanos();
        Self {
            email: format!("user{suffix}-{nanos}@example.com"),
            password: "04234".to_string(),
        }
    }
}

/// Login request carrying the ignored expiry hint
#[derive(Debug, Serialize)]
pub struct LoginWithHint {
    pub email: String,
    pub password: String,
    pub expires_in_seconds: u64,
}

/// User profile
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub token: String,
    pub refresh_token: String,
}

/// Refresh response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Create chirp request
#[derive(Debug, Serialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

impl CreateChirpRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Chirp
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
