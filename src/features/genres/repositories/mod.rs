//! Storage for genres. Deleting a genre removes the row.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::genres::models::Genre;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryGenreRepository;
pub use postgres::PgGenreRepository;

#[derive(Debug, Clone, PartialEq)]
pub struct NewGenre {
    pub name: String,
    pub is_active: bool,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreChanges {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn create(&self, genre: NewGenre) -> Result<Genre>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>>;

    /// All genres ordered by creation time
    async fn list(&self) -> Result<Vec<Genre>>;

    async fn update(&self, id: Uuid, changes: GenreChanges) -> Result<Option<Genre>>;

    /// Returns `false` when `id` is unknown
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
