use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{
    CategoryChanges, CategoryRepository, NewCategory,
};

/// PostgreSQL-backed category storage
#[derive(Debug, Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, description, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(category.name)
        .bind(category.description)
        .bind(category.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at, deleted_at
            FROM categories
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id_with_trashed(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at, deleted_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at, deleted_at
            FROM categories
            WHERE deleted_at IS NULL
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>> {
        let (set_description, description) = match changes.description {
            Some(description) => (true, description),
            None => (false, None),
        };

        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(set_description)
        .bind(description)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn restore(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET deleted_at = NULL
            WHERE id = $1
            RETURNING id, name, description, is_active, created_at, updated_at, deleted_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
