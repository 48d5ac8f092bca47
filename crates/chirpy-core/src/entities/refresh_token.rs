//! Refresh token entity - an opaque, server-tracked session credential

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::UserId;

/// Why a stored refresh token can no longer be exchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenStatus {
    Active,
    Revoked,
    Expired,
}

/// Refresh token record
///
/// The token value itself is the lookup key. Revocation is monotonic: once
/// `revoked_at` is set it is never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Create a record issued at `issued_at` that lives for `ttl`
    pub fn new(token: String, user_id: UserId, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token,
            user_id,
            created_at: issued_at,
            updated_at: issued_at,
            expires_at: issued_at + ttl,
            revoked_at: None,
        }
    }

    /// Status at instant `now`; revocation wins over expiry
    pub fn status_at(&self, now: DateTime<Utc>) -> RefreshTokenStatus {
        if self.revoked_at.is_some() {
            RefreshTokenStatus::Revoked
        } else if now >= self.expires_at {
            RefreshTokenStatus::Expired
        } else {
            RefreshTokenStatus::Active
        }
    }

    /// Mark revoked at `now`; a second call keeps the first timestamp
    pub fn revoke(&mut self, now: DateTime<Utc>) {
        if self.revoked_at.is_none() {
            self.revoked_at = Some(now);
            self.updated_at = now;
        }
    }
}

impl std::fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshToken")
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .field("revoked_at", &self.revoked_at)
            .finish_non_exhaustive()
    }
}
