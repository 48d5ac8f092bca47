//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod chirps;
pub mod health;
pub mod users;
