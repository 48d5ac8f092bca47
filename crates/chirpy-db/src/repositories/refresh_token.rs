//! PostgreSQL implementation of RefreshTokenRepository
//!
//! Token values are never logged; spans carry the owning user only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use chirpy_core::entities::RefreshToken;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RefreshTokenRepository, RepoResult};

use crate::models::RefreshTokenModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token), fields(user_id = %token.user_id))]
    async fn insert(&self, token: &RefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&token.token)
        .bind(token.user_id.into_inner())
        .bind(token.created_at)
        .bind(token.updated_at)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RefreshTokenExists))?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, token))]
    async fn mark_revoked(&self, token: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        // An already-revoked row keeps its first revocation time
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, $2),
                updated_at = CASE WHEN revoked_at IS NULL THEN $2 ELSE updated_at END
            WHERE token = $1
            ",
        )
        .bind(token)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
