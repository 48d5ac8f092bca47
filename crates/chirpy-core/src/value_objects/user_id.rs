//! User ID - opaque UUID identifying a user account
//!
//! The same value is used as the `sub` claim of access tokens and as the
//! owner key of refresh tokens and chirps.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random (v4) user ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from the hyphenated string representation
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| UserIdParseError::InvalidFormat)
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}
