use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::genres::models::Genre;
use crate::features::genres::repositories::{GenreChanges, GenreRepository, NewGenre};

/// PostgreSQL-backed genre storage
#[derive(Debug, Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn create(&self, genre: NewGenre) -> Result<Genre> {
        sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (id, name, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, name, is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(genre.name)
        .bind(genre.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create genre: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>> {
        sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Genre>> {
        sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM genres
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list genres: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, changes: GenreChanges) -> Result<Option<Genre>> {
        sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = COALESCE($2, name),
                is_active = COALESCE($3, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update genre {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
