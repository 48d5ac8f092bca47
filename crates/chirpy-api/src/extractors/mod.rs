//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path parameters and JSON bodies.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, BearerToken};
pub use path::ChirpIdPath;
pub use validated::{JsonBody, ValidatedJson};
