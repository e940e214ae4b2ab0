use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryInput, CategoryPayload, CategoryResponseDto};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{
    CategoryChanges, CategoryRepository, NewCategory,
};
use crate::shared::messages::Locale;
use crate::shared::types::Resource;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
    locale: Locale,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>, locale: Locale) -> Self {
        Self { repository, locale }
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::not_found(Category::NAME, id)
    }

    fn validate(&self, payload: CategoryPayload) -> Result<CategoryInput> {
        payload
            .into_input()
            .map_err(|errors| AppError::validation(&errors, self.locale))
    }

    /// List all categories that are not soft-deleted
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| Self::not_found(id))
    }

    /// Get a category even if it has been soft-deleted
    pub async fn get_with_trashed(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_id_with_trashed(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(&self, payload: CategoryPayload) -> Result<CategoryResponseDto> {
        let input = self.validate(payload)?;

        let category = self
            .repository
            .create(NewCategory {
                name: input.name,
                description: input.description.flatten(),
                is_active: input.is_active.unwrap_or(true),
            })
            .await?;

        tracing::info!("Category created: id={}", category.id);
        Ok(category.into())
    }

    /// Update a category. Unknown ids are reported before validation errors.
    pub async fn update(&self, id: Uuid, payload: CategoryPayload) -> Result<CategoryResponseDto> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(Self::not_found(id));
        }

        let input = self.validate(payload)?;

        let category = self
            .repository
            .update(
                id,
                CategoryChanges {
                    name: Some(input.name),
                    description: input.description,
                    is_active: input.is_active,
                },
            )
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!("Category updated: id={}", category.id);
        Ok(category.into())
    }

    /// Soft-delete a category
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(Self::not_found(id));
        }

        tracing::info!("Category soft-deleted: id={}", id);
        Ok(())
    }

    /// Restore a soft-deleted category. Restoring an active one is a no-op.
    pub async fn restore(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = self.get_with_trashed(id).await?;
        if category.deleted_at.is_none() {
            return Ok(category);
        }

        let category = self
            .repository
            .restore(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        tracing::info!("Category restored: id={}", category.id);
        Ok(category.into())
    }
}
