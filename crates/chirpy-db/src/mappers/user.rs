//! User entity <-> model mapper

use chirpy_core::entities::{Credential, User};
use chirpy_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity, dropping the password hash
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert UserModel to a login credential
impl From<UserModel> for Credential {
    fn from(model: UserModel) -> Self {
        let hashed_password = model.hashed_password.clone();
        Credential::new(User::from(model), hashed_password)
    }
}
