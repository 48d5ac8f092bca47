//! Access token utilities
//!
//! Short-lived, stateless HS256 JWTs carrying `{iss, sub, iat, exp}`. The
//! verification algorithm is pinned to HS256 and expiry is checked with no
//! leeway: a token is rejected once `now >= exp`.

use std::time::Duration;

use chirpy_core::UserId;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{crypto, decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issuer stamped into, and required from, every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// Access token failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    Encoding(String),
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer, always [`TOKEN_ISSUER`]
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `user_id` issued now and valid for `ttl`
    ///
    /// Claims carry whole seconds, so a sub-second remainder of `ttl`
    /// rounds up.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat,
            exp: iat.saturating_add(whole_seconds(ttl)),
        }
    }

    /// Get the user ID from the subject
    pub fn user_id(&self) -> Result<UserId, TokenError> {
        UserId::parse(&self.sub).map_err(|_| TokenError::Malformed)
    }

    /// Check whether the token is expired at Unix time `now`
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

fn whole_seconds(ttl: Duration) -> i64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    i64::try_from(secs).unwrap_or(i64::MAX)
}

/// Validation rules shared by every verification
fn pinned_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // exp is compared strictly in `JwtService::verify`
    validation.validate_exp = false;
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation
}

fn classify(err: &jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::BadSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}

/// Split a compact token into its signed `header.claims` part and signature
fn split_signed(token: &str) -> Result<(&str, &str), TokenError> {
    let (message, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
    if message.matches('.').count() != 1 {
        return Err(TokenError::Malformed);
    }
    Ok((message, signature))
}

/// JWT service for issuing and verifying access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl: Duration,
}

impl JwtService {
    /// Create a new JWT service with the given secret and access token lifetime
    pub fn new(secret: &str, access_token_ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: pinned_validation(),
            access_token_ttl,
        })
    }

    /// Lifetime of tokens produced by [`JwtService::issue`]
    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Issue an access token for a user with the configured lifetime
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        self.issue_with_ttl(user_id, self.access_token_ttl)
    }

    /// Issue an access token with an explicit lifetime
    pub fn issue_with_ttl(&self, user_id: UserId, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(user_id, ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify signature, issuer and expiry, returning the claims
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        // Signature is checked over the raw segments before any JSON is parsed
        let (message, signature) = split_signed(token)?;
        let signature_ok = crypto::verify(
            signature,
            message.as_bytes(),
            &self.decoding_key,
            Algorithm::HS256,
        )
        .map_err(|_| TokenError::Malformed)?;
        if !signature_ok {
            return Err(TokenError::BadSignature);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify(&e))?;

        let claims = token_data.claims;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verify a token and return the user it was issued to
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        self.decode_claims(token)?.user_id()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_ttl", &self.access_token_ttl)
            .finish_non_exhaustive()
    }
}

/// Issue a token for `user_id` signed with `secret`
pub fn make_jwt(user_id: UserId, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    JwtService::new(secret, ttl)?.issue(user_id)
}

/// Verify `token` against `secret` and return its subject
pub fn validate_jwt(token: &str, secret: &str) -> Result<UserId, TokenError> {
    JwtService::new(secret, Duration::ZERO)?.verify(token)
}
