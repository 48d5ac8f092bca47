//! User entity - represents a chirpy account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity (public profile fields only, never the password hash)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a fresh ID
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}

/// A user paired with the stored password hash
///
/// Only produced by the user store for login; the hash never leaves the
/// service layer.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub user: User,
    pub hashed_password: String,
}

impl Credential {
    pub fn new(user: User, hashed_password: String) -> Self {
        Self {
            user,
            hashed_password,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
