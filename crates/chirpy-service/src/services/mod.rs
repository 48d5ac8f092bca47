//! Business logic services
//!
//! This module contains the service layer: session management, refresh
//! token bookkeeping, user accounts and chirps.

pub mod chirp;
pub mod context;
pub mod error;
pub mod refresh;
pub mod session;
pub mod user;

pub use chirp::ChirpService;
pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_REFRESH_TOKEN_TTL_DAYS};
pub use error::{ServiceError, ServiceResult};
pub use refresh::RefreshTokenService;
pub use session::SessionService;
pub use user::UserService;
