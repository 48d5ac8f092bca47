//! Session service
//!
//! Login, authorize-request, refresh and revoke. Every authentication failure
//! is logged with its specific cause and returned as one generic error, so
//! callers cannot tell an unknown email from a wrong password, or an expired
//! refresh token from a revoked one.

use tracing::{info, instrument, warn};

use chirpy_common::{extract_bearer_token, AppError};
use chirpy_core::value_objects::UserId;

use crate::dto::{LoginRequest, LoginResponse, TokenResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::refresh::RefreshTokenService;

/// Session orchestrator
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// On success one refresh token record is created.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let credential = self
            .ctx
            .user_repo()
            .find_credential_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::unauthorized()
            })?;

        let matches = self
            .ctx
            .password_service()
            .verify(&request.password, &credential.hashed_password)?;

        if !matches {
            warn!(user_id = %credential.user.id, "Login failed: invalid password");
            return Err(ServiceError::unauthorized());
        }

        let user_id = credential.user.id;
        let access_token = self.issue_access_token(user_id)?;
        let refresh = RefreshTokenService::new(self.ctx).issue_for(user_id).await?;

        info!(user_id = %user_id, "User logged in successfully");

        Ok(LoginResponse::new(
            UserResponse::from(credential.user),
            access_token,
            refresh.token,
        ))
    }

    /// Authenticate a request from its `Authorization` header value
    ///
    /// Purely stateless: the refresh token store is never consulted.
    pub fn authorize_request(&self, header: Option<&str>) -> ServiceResult<UserId> {
        let token = extract_bearer_token(header).map_err(|e| {
            warn!(cause = %e, "Request rejected: no usable bearer token");
            ServiceError::unauthenticated()
        })?;

        self.ctx.jwt_service().verify(token).map_err(|e| {
            warn!(cause = %e, "Request rejected: access token invalid");
            ServiceError::unauthenticated()
        })
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself is left as is.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenResponse> {
        let user_id = match RefreshTokenService::new(self.ctx).resolve(refresh_token).await {
            Ok(user_id) => user_id,
            Err(ServiceError::Domain(e)) if e.is_session_rejection() => {
                warn!(cause = %e, "Refresh rejected");
                return Err(ServiceError::unauthenticated());
            }
            Err(e) => return Err(e),
        };

        let token = self.issue_access_token(user_id)?;
        info!(user_id = %user_id, "Access token refreshed");

        Ok(TokenResponse { token })
    }

    /// Revoke a refresh token
    ///
    /// Succeeds whether or not the token exists; only persistence failures
    /// are reported.
    #[instrument(skip_all)]
    pub async fn revoke(&self, refresh_token: &str) -> ServiceResult<()> {
        let found = RefreshTokenService::new(self.ctx).revoke(refresh_token).await?;
        if found {
            info!("Refresh token revoked");
        }
        Ok(())
    }

    fn issue_access_token(&self, user_id: UserId) -> ServiceResult<String> {
        self.ctx
            .jwt_service()
            .issue(user_id)
            .map_err(|e| ServiceError::App(AppError::internal(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_common::JwtService;
    use chirpy_core::entities::User;
    use chirpy_db::MemoryStore;
    use std::sync::Arc;
    use std::time::Duration;

    async fn setup() -> (ServiceContext, User) {
        let ctx = ServiceContext::builder()
            .memory(Arc::new(MemoryStore::new()))
            .jwt_service(Arc::new(
                JwtService::new("session-secret", Duration::from_secs(3600)).unwrap(),
            ))
            .build()
            .unwrap();

        let user = User::new("a@b.com".to_string());
        let hash = ctx.password_service().hash("secret").unwrap();
        ctx.user_repo().create(&user, &hash).await.unwrap();
        (ctx, user)
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let (ctx, user) = setup().await;
        let session = SessionService::new(&ctx);

        let response = session.login(login_request("a@b.com", "secret")).await.unwrap();
        assert_eq!(response.user.id, user.id.into_inner());
        assert_eq!(response.refresh_token.len(), 64);

        let header = format!("Bearer {}", response.token);
        assert_eq!(session.authorize_request(Some(&header)).unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_login_failures_look_alike() {
        let (ctx, _) = setup().await;
        let session = SessionService::new(&ctx);

        let unknown = session.login(login_request("x@y.com", "secret")).await.unwrap_err();
        let wrong = session.login(login_request("a@b.com", "wrong")).await.unwrap_err();

        assert_eq!(unknown.status_code(), 401);
        assert_eq!(wrong.status_code(), 401);
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_authorize_request_rejections() {
        let (ctx, _) = setup().await;
        let session = SessionService::new(&ctx);

        for header in [None, Some("Bearer   "), Some("Token abc"), Some("Bearer not-a-jwt")] {
            let err = session.authorize_request(header).unwrap_err();
            assert!(matches!(err, ServiceError::App(AppError::Unauthenticated)));
        }
    }

    #[tokio::test]
    async fn test_refresh_and_revoke() {
        let (ctx, user) = setup().await;
        let session = SessionService::new(&ctx);
        let login = session.login(login_request("a@b.com", "secret")).await.unwrap();

        let refreshed = session.refresh(&login.refresh_token).await.unwrap();
        let header = format!("Bearer {}", refreshed.token);
        assert_eq!(session.authorize_request(Some(&header)).unwrap(), user.id);

        session.revoke(&login.refresh_token).await.unwrap();
        session.revoke(&login.refresh_token).await.unwrap();

        let err = session.refresh(&login.refresh_token).await.unwrap_err();
        assert!(matches!(err, ServiceError::App(AppError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_revoke_unknown_succeeds() {
        let (ctx, _) = setup().await;
        assert!(SessionService::new(&ctx).revoke("never-issued").await.is_ok());
    }
}
