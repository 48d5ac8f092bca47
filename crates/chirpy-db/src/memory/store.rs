//! In-memory implementation of every repository trait
//!
//! Backs service tests and the HTTP test server. Mirrors the PostgreSQL
//! constraints that the services rely on: unique emails, unique refresh
//! token values, and cascading deletes from users.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use chirpy_core::entities::{Chirp, Credential, RefreshToken, User};
use chirpy_core::error::DomainError;
use chirpy_core::traits::{ChirpRepository, RefreshTokenRepository, RepoResult, UserRepository};
use chirpy_core::value_objects::UserId;

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, Credential>,
    chirps: Vec<Chirp>,
    refresh_tokens: HashMap<String, RefreshToken>,
}

/// Process-local store; the lock is never held across an await point
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    /// Number of stored refresh tokens, revoked or not
    pub fn refresh_token_count(&self) -> usize {
        self.tables.read().refresh_tokens.len()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("MemoryStore")
            .field("users", &tables.users.len())
            .field("chirps", &tables.chirps.len())
            .field("refresh_tokens", &tables.refresh_tokens.len())
            .finish()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_credential_by_email(&self, email: &str) -> RepoResult<Option<Credential>> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find(|c| c.user.email == email)
            .cloned())
    }

    async fn create(&self, user: &User, hashed_password: &str) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|c| c.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        tables.users.insert(
            user.id,
            Credential::new(user.clone(), hashed_password.to_string()),
        );
        Ok(())
    }

    async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        hashed_password: &str,
    ) -> RepoResult<User> {
        let mut tables = self.tables.write();
        if tables
            .users
            .values()
            .any(|c| c.user.id != id && c.user.email == email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }

        let credential = tables
            .users
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;
        credential.user.set_email(email.to_string());
        credential.hashed_password = hashed_password.to_string();

        Ok(credential.user.clone())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let mut tables = self.tables.write();
        let removed = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        tables.refresh_tokens.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ChirpRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chirp>> {
        Ok(self.tables.read().chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Chirp>> {
        let mut chirps = self.tables.read().chirps.clone();
        chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(chirps)
    }

    async fn create(&self, chirp: &Chirp) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&chirp.user_id) {
            return Err(DomainError::UserNotFound(chirp.user_id));
        }
        tables.chirps.push(chirp.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tables = self.tables.write();
        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);
        if tables.chirps.len() == before {
            return Err(DomainError::ChirpNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryStore {
    async fn insert(&self, token: &RefreshToken) -> RepoResult<()> {
        let mut tables = self.tables.write();
        if tables.refresh_tokens.contains_key(&token.token) {
            return Err(DomainError::RefreshTokenExists);
        }
        tables.refresh_tokens.insert(token.token.clone(), token.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>> {
        Ok(self.tables.read().refresh_tokens.get(token).cloned())
    }

    async fn mark_revoked(&self, token: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        match self.tables.write().refresh_tokens.get_mut(token) {
            Some(record) => {
                record.revoke(at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
