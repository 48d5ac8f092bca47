//! Chirp entity <-> model mapper

use chirpy_core::entities::Chirp;
use chirpy_core::value_objects::UserId;

use crate::models::ChirpModel;

impl From<ChirpModel> for Chirp {
    fn from(model: ChirpModel) -> Self {
        Chirp {
            id: model.id,
            body: model.body,
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
