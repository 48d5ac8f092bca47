//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chirpy_core::entities::{Chirp, User};

use super::responses::{ChirpResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_inner(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Chirp Mappers
// ============================================================================

impl From<&Chirp> for ChirpResponse {
    fn from(chirp: &Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body.clone(),
            user_id: chirp.user_id.into_inner(),
        }
    }
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self::from(&chirp)
    }
}
