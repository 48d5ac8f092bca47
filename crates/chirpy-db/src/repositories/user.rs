//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chirpy_core::entities::{Credential, User};
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RepoResult, UserRepository};
use chirpy_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_credential_by_email(&self, email: &str) -> RepoResult<Option<Credential>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, hashed_password, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Credential::from))
    }

    #[instrument(skip(self, hashed_password))]
    async fn create(&self, user: &User, hashed_password: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, hashed_password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.email)
        .bind(hashed_password)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, hashed_password))]
    async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        hashed_password: &str,
    ) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET email = $2, hashed_password = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, hashed_password, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(email)
        .bind(hashed_password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
