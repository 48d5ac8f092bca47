//! Chirp database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for chirps table
#[derive(Debug, Clone, FromRow)]
pub struct ChirpModel {
    pub id: Uuid,
    pub body: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
