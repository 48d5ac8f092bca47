//! Chirp entity - a short text post and its moderation rules

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Maximum chirp length in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced by [`CENSOR_MASK`] (matched case-insensitively)
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a banned word
pub const CENSOR_MASK: &str = "****";

/// Chirp entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub id: Uuid,
    pub body: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    /// Validate and censor `body`, then build a new chirp owned by `user_id`
    pub fn compose(user_id: UserId, body: &str) -> Result<Self, DomainError> {
        let body = moderate(body)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            body,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check whether `user_id` wrote this chirp
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Validate a chirp body and mask banned words
///
/// Words are split on single spaces so the original spacing survives; a
/// word with punctuation attached (`"fornax!"`) is left untouched.
pub fn moderate(body: &str) -> Result<String, DomainError> {
    if body.is_empty() {
        return Err(DomainError::EmptyChirp);
    }

    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(DomainError::ChirpTooLong {
            max: MAX_CHIRP_LENGTH,
        });
    }

    let censored = body
        .split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if BANNED_WORDS.contains(&lowered.as_str()) {
                CENSOR_MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(censored)
}
