//! # chirpy-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ChirpResponse, CreateChirpRequest, CredentialsRequest, HealthChecks, LoginRequest,
    LoginResponse, ReadinessResponse, TokenResponse, UserResponse,
};
pub use services::{
    ChirpService, RefreshTokenService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SessionService, UserService, DEFAULT_REFRESH_TOKEN_TTL_DAYS,
};
