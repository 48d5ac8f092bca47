//! Refresh token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for refresh_tokens table
#[derive(Clone, FromRow)]
pub struct RefreshTokenModel {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenModel {
    /// Check if token is revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

impl std::fmt::Debug for RefreshTokenModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenModel")
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .field("revoked_at", &self.revoked_at)
            .finish_non_exhaustive()
    }
}
