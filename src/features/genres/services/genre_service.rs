use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::genres::dtos::{GenreInput, GenrePayload, GenreResponseDto};
use crate::features::genres::models::Genre;
use crate::features::genres::repositories::{GenreChanges, GenreRepository, NewGenre};
use crate::shared::messages::Locale;
use crate::shared::types::Resource;

/// Service for genre operations
pub struct GenreService {
    repository: Arc<dyn GenreRepository>,
    locale: Locale,
}

impl GenreService {
    pub fn new(repository: Arc<dyn GenreRepository>, locale: Locale) -> Self {
        Self { repository, locale }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::not_found(Genre::NAME, id)
    }

    fn validate(&self, payload: GenrePayload) -> Result<GenreInput> {
        payload
            .into_input()
            .map_err(|errors| AppError::validation(&errors, self.locale))
    }

    pub async fn list(&self) -> Result<Vec<GenreResponseDto>> {
        let genres = self.repository.list().await?;
        Ok(genres.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<GenreResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(&self, payload: GenrePayload) -> Result<GenreResponseDto> {
        let input = self.validate(payload)?;

        let genre = self
            .repository
            .create(NewGenre {
                name: input.name,
                is_active: input.is_active.unwrap_or(true),
            })
            .await?;

        tracing::info!("Genre created: id={}", genre.id);
        Ok(genre.into())
    }

    pub async fn update(&self, id: Uuid, payload: GenrePayload) -> Result<GenreResponseDto> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(Self::not_found(id));
        }

        let input = self.validate(payload)?;

        let genre = self
            .repository
            .update(
                id,
                GenreChanges {
                    name: Some(input.name),
                    is_active: input.is_active,
                },
            )
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!("Genre updated: id={}", genre.id);
        Ok(genre.into())
    }

    // TODO: genres are hard-deleted while categories are soft-deleted; revisit
    // once it is settled whether genres need a restore path.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(Self::not_found(id));
        }

        tracing::info!("Genre deleted: id={}", id);
        Ok(())
    }
}
