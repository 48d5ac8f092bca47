//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain
//! objects (chirpy-core).

mod chirp;
mod refresh_token;
mod user;
