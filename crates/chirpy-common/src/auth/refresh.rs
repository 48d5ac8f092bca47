//! Opaque refresh token generation

use rand::{rngs::OsRng, RngCore};

/// Bytes of entropy in a refresh token
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate a refresh token: 32 random bytes from the OS, hex encoded
#[must_use]
pub fn make_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
