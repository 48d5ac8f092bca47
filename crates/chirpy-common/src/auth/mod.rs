//! Authentication utilities

mod bearer;
mod jwt;
mod password;
mod refresh;

pub use bearer::{extract_bearer_token, BearerError};
pub use jwt::{make_jwt, validate_jwt, Claims, JwtService, TokenError, TOKEN_ISSUER};
pub use password::{hash_password, verify_password, PasswordService};
pub use refresh::{make_refresh_token, REFRESH_TOKEN_BYTES};
