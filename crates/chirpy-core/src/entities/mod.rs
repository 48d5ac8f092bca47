//! Domain entities - core business objects

mod chirp;
mod refresh_token;
mod user;

pub use chirp::{moderate, Chirp, BANNED_WORDS, CENSOR_MASK, MAX_CHIRP_LENGTH};
pub use refresh_token::{RefreshToken, RefreshTokenStatus};
pub use user::{Credential, User};
