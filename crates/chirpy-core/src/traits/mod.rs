//! Repository traits

mod repositories;

pub use repositories::{ChirpRepository, RefreshTokenRepository, RepoResult, UserRepository};
