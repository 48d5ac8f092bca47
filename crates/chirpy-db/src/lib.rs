//! # chirpy-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `chirpy-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//! - An in-memory [`MemoryStore`] for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chirpy_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use chirpy_db::repositories::PgUserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgChirpRepository, PgRefreshTokenRepository, PgUserRepository};
