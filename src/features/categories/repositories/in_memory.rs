use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{
    CategoryChanges, CategoryRepository, NewCategory,
};

/// Process-local category storage.
///
/// Rows are kept in insertion order, which is also creation order.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.categories.write().await.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id && !c.is_trashed())
            .cloned())
    }

    async fn find_by_id_with_trashed(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .filter(|c| !c.is_trashed())
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let mut categories = self.categories.write().await;
        let Some(category) = categories
            .iter_mut()
            .find(|c| c.id == id && !c.is_trashed())
        else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            category.name = name;
        }
        if let Some(description) = changes.description {
            category.description = description;
        }
        if let Some(is_active) = changes.is_active {
            category.is_active = is_active;
        }
        category.updated_at = Utc::now();

        Ok(Some(category.clone()))
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let mut categories = self.categories.write().await;
        match categories
            .iter_mut()
            .find(|c| c.id == id && !c.is_trashed())
        {
            Some(category) => {
                category.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: Uuid) -> Result<Option<Category>> {
        let mut categories = self.categories.write().await;
        Ok(categories.iter_mut().find(|c| c.id == id).map(|category| {
            category.deleted_at = None;
            category.clone()
        }))
    }
}
