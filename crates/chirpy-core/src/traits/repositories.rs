//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Chirp, Credential, RefreshToken, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user together with the password hash, by email
    async fn find_credential_by_email(&self, email: &str) -> RepoResult<Option<Credential>>;

    /// Create a new user; fails with `EmailAlreadyExists` on a duplicate email
    async fn create(&self, user: &User, hashed_password: &str) -> RepoResult<()>;

    /// Replace email and password hash, returning the updated user
    async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        hashed_password: &str,
    ) -> RepoResult<User>;

    /// Delete every user (and, by cascade, their chirps and refresh tokens)
    async fn delete_all(&self) -> RepoResult<u64>;
}

// ============================================================================
// Chirp Repository
// ============================================================================

#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Find chirp by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chirp>>;

    /// List all chirps, oldest first
    async fn list(&self) -> RepoResult<Vec<Chirp>>;

    /// Create a new chirp
    async fn create(&self, chirp: &Chirp) -> RepoResult<()>;

    /// Delete a chirp; fails with `ChirpNotFound` if absent
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store a new record; fails with `RefreshTokenExists` on a duplicate value
    async fn insert(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Look up a record by its token value
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Set `revoked_at` if not already set
    ///
    /// Returns `false` when no record with this value exists.
    async fn mark_revoked(&self, token: &str, at: DateTime<Utc>) -> RepoResult<bool>;
}
