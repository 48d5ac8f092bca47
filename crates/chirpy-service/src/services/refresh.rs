//! Refresh token service
//!
//! Issues opaque, server-tracked refresh tokens and checks them against the
//! stored record. The token value is the lookup key; nothing about it is
//! parsed.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use chirpy_common::make_refresh_token;
use chirpy_core::entities::{RefreshToken, RefreshTokenStatus};
use chirpy_core::error::DomainError;
use chirpy_core::value_objects::UserId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Refresh token service
pub struct RefreshTokenService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RefreshTokenService<'a> {
    /// Create a new RefreshTokenService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate a new token value
    pub fn issue(&self) -> String {
        make_refresh_token()
    }

    /// Store a record for `token`
    #[instrument(skip(self, token))]
    pub async fn persist(
        &self,
        token: &str,
        user_id: UserId,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> ServiceResult<RefreshToken> {
        let record = RefreshToken {
            token: token.to_string(),
            user_id,
            created_at: issued_at,
            updated_at: issued_at,
            expires_at,
            revoked_at: None,
        };

        self.ctx
            .refresh_token_repo()
            .insert(&record)
            .await
            .map_err(|e| match e {
                // 256 random bits colliding is not a client problem
                DomainError::RefreshTokenExists => {
                    ServiceError::internal("refresh token value collision")
                }
                other => ServiceError::from(other),
            })?;

        Ok(record)
    }

    /// Issue and persist a token for `user_id` with the configured lifetime
    ///
    /// The value is returned only once the record is stored.
    #[instrument(skip(self))]
    pub async fn issue_for(&self, user_id: UserId) -> ServiceResult<RefreshToken> {
        let token = self.issue();
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ctx.refresh_token_ttl();

        self.persist(&token, user_id, issued_at, expires_at).await
    }

    /// Resolve a token to its owner
    ///
    /// # Errors
    /// `RefreshTokenNotFound`, `RefreshTokenRevoked` or `RefreshTokenExpired`
    /// for unusable tokens; persistence failures pass through.
    #[instrument(skip_all)]
    pub async fn resolve(&self, token: &str) -> ServiceResult<UserId> {
        let record = self
            .ctx
            .refresh_token_repo()
            .find_by_token(token)
            .await?
            .ok_or(DomainError::RefreshTokenNotFound)?;

        match record.status_at(Utc::now()) {
            RefreshTokenStatus::Active => Ok(record.user_id),
            RefreshTokenStatus::Revoked => Err(DomainError::RefreshTokenRevoked.into()),
            RefreshTokenStatus::Expired => Err(DomainError::RefreshTokenExpired.into()),
        }
    }

    /// Mark a token revoked; returns whether a record existed
    #[instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> ServiceResult<bool> {
        let found = self
            .ctx
            .refresh_token_repo()
            .mark_revoked(token, Utc::now())
            .await?;

        debug!(found, "Refresh token revocation processed");
        Ok(found)
    }
}
