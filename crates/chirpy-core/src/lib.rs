//! # chirpy-core
//!
//! Domain layer containing entities, value objects, moderation rules, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    moderate, Chirp, Credential, RefreshToken, RefreshTokenStatus, User, BANNED_WORDS,
    CENSOR_MASK, MAX_CHIRP_LENGTH,
};
pub use error::DomainError;
pub use traits::{ChirpRepository, RefreshTokenRepository, RepoResult, UserRepository};
pub use value_objects::{UserId, UserIdParseError};
