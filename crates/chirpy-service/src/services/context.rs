//! Service context - dependency container for services
//!
//! Holds the repositories, the signing service, and session settings. Built
//! once at start-up and shared read-only across requests.

use std::sync::Arc;

use chirpy_common::auth::{JwtService, PasswordService};
use chirpy_common::Platform;
use chirpy_core::traits::{ChirpRepository, RefreshTokenRepository, UserRepository};
use chirpy_db::{MemoryStore, PgChirpRepository, PgPool, PgRefreshTokenRepository, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Default refresh token lifetime
pub const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (PostgreSQL or in-memory)
/// - JWT service for access tokens
/// - Password hashing
/// - Session settings (refresh token lifetime, platform)
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool; absent when running on the in-memory store
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    chirp_repo: Arc<dyn ChirpRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,

    // Settings
    refresh_token_ttl: chrono::Duration,
    platform: Platform,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the chirp repository
    pub fn chirp_repo(&self) -> &dyn ChirpRepository {
        self.chirp_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    // === Settings ===

    /// Lifetime of newly issued refresh tokens
    pub fn refresh_token_ttl(&self) -> chrono::Duration {
        self.refresh_token_ttl
    }

    /// Deployment platform
    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("platform", &self.platform)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    chirp_repo: Option<Arc<dyn ChirpRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    refresh_token_ttl: Option<chrono::Duration>,
    platform: Platform,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories over `pool`
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.user_repo = Some(Arc::new(PgUserRepository::new(pool.clone())));
        self.chirp_repo = Some(Arc::new(PgChirpRepository::new(pool.clone())));
        self.refresh_token_repo = Some(Arc::new(PgRefreshTokenRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    /// Use one in-memory store for every repository
    pub fn memory(mut self, store: Arc<MemoryStore>) -> Self {
        self.user_repo = Some(store.clone());
        self.chirp_repo = Some(store.clone());
        self.refresh_token_repo = Some(store);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn chirp_repo(mut self, repo: Arc<dyn ChirpRepository>) -> Self {
        self.chirp_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn refresh_token_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.refresh_token_ttl = Some(ttl);
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            chirp_repo: self
                .chirp_repo
                .ok_or_else(|| ServiceError::validation("chirp_repo is required"))?,
            refresh_token_repo: self
                .refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            password_service: PasswordService::new(),
            refresh_token_ttl: self
                .refresh_token_ttl
                .unwrap_or_else(|| chrono::Duration::days(DEFAULT_REFRESH_TOKEN_TTL_DAYS)),
            platform: self.platform,
        })
    }
}
