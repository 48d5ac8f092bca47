//! User service
//!
//! Handles registration, credential updates, and the development reset.

use chirpy_core::entities::User;
use chirpy_core::value_objects::UserId;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CredentialsRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: CredentialsRequest) -> ServiceResult<UserResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let hashed_password = self.ctx.password_service().hash(&request.password)?;
        let user = User::new(request.email);

        self.ctx.user_repo().create(&user, &hashed_password).await?;

        info!(user_id = %user.id, "User registered successfully");
        Ok(UserResponse::from(user))
    }

    /// Replace the caller's email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn update_credentials(
        &self,
        user_id: UserId,
        request: CredentialsRequest,
    ) -> ServiceResult<UserResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let hashed_password = self.ctx.password_service().hash(&request.password)?;
        let user = self
            .ctx
            .user_repo()
            .update_credentials(user_id, &request.email, &hashed_password)
            .await?;

        info!(user_id = %user_id, "User credentials updated");
        Ok(UserResponse::from(user))
    }

    /// Delete every user; only allowed on the dev platform
    #[instrument(skip(self))]
    pub async fn reset(&self) -> ServiceResult<u64> {
        if !self.ctx.platform().is_dev() {
            warn!("Reset refused outside the dev platform");
            return Err(ServiceError::forbidden("reset is only allowed in dev"));
        }

        let removed = self.ctx.user_repo().delete_all().await?;
        info!(removed, "All users deleted");
        Ok(removed)
    }
}
