//! Chirp service
//!
//! Posting, listing, fetching and deleting chirps.

use chirpy_core::entities::Chirp;
use chirpy_core::error::DomainError;
use chirpy_core::value_objects::UserId;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ChirpResponse, CreateChirpRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Chirp service
pub struct ChirpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChirpService<'a> {
    /// Create a new ChirpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Moderate and store a chirp written by `author_id`
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: UserId,
        request: CreateChirpRequest,
    ) -> ServiceResult<ChirpResponse> {
        let chirp = Chirp::compose(author_id, &request.body)?;

        self.ctx.chirp_repo().create(&chirp).await?;

        info!(chirp_id = %chirp.id, "Chirp created");
        Ok(ChirpResponse::from(chirp))
    }

    /// List all chirps, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ChirpResponse>> {
        let chirps = self.ctx.chirp_repo().list().await?;
        Ok(chirps.into_iter().map(ChirpResponse::from).collect())
    }

    /// Get one chirp
    #[instrument(skip(self))]
    pub async fn get(&self, chirp_id: Uuid) -> ServiceResult<ChirpResponse> {
        self.ctx
            .chirp_repo()
            .find_by_id(chirp_id)
            .await?
            .map(ChirpResponse::from)
            .ok_or_else(|| ServiceError::not_found("Chirp", chirp_id.to_string()))
    }

    /// Delete a chirp; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete(&self, caller_id: UserId, chirp_id: Uuid) -> ServiceResult<()> {
        let chirp = self
            .ctx
            .chirp_repo()
            .find_by_id(chirp_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Chirp", chirp_id.to_string()))?;

        if !chirp.is_authored_by(caller_id) {
            warn!(author_id = %chirp.user_id, "Chirp deletion refused: not the author");
            return Err(DomainError::NotChirpAuthor.into());
        }

        self.ctx.chirp_repo().delete(chirp_id).await?;

        info!("Chirp deleted");
        Ok(())
    }
}
