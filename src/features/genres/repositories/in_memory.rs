use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::genres::models::Genre;
use crate::features::genres::repositories::{GenreChanges, GenreRepository, NewGenre};

/// Process-local genre storage, kept in creation order
#[derive(Debug, Default)]
pub struct InMemoryGenreRepository {
    genres: RwLock<Vec<Genre>>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn create(&self, genre: NewGenre) -> Result<Genre> {
        let now = Utc::now();
        let genre = Genre {
            id: Uuid::new_v4(),
            name: genre.name,
            is_active: genre.is_active,
            created_at: now,
            updated_at: now,
        };

        self.genres.write().await.push(genre.clone());
        Ok(genre)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>> {
        Ok(self
            .genres
            .read()
            .await
            .iter()
            .find(|g| g.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Genre>> {
        Ok(self.genres.read().await.clone())
    }

    async fn update(&self, id: Uuid, changes: GenreChanges) -> Result<Option<Genre>> {
        let mut genres = self.genres.write().await;
        let Some(genre) = genres.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            genre.name = name;
        }
        if let Some(is_active) = changes.is_active {
            genre.is_active = is_active;
        }
        genre.updated_at = Utc::now();

        Ok(Some(genre.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut genres = self.genres.write().await;
        let before = genres.len();
        genres.retain(|g| g.id != id);
        Ok(genres.len() < before)
    }
}
