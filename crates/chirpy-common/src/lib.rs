//! # chirpy-common
//!
//! Shared utilities including configuration, error handling, authentication
//! primitives, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    extract_bearer_token, hash_password, make_jwt, make_refresh_token, validate_jwt,
    verify_password, BearerError, Claims, JwtService, PasswordService, TokenError,
    REFRESH_TOKEN_BYTES, TOKEN_ISSUER,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    Platform, ServerConfig, StaticFilesConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
