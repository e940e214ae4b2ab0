//! Storage for categories.
//!
//! Soft-deleted rows are hidden from `find_by_id`, `list` and `update`;
//! `find_by_id_with_trashed` is the only lookup that sees them.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::Category;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryCategoryRepository;
pub use postgres::PgCategoryRepository;

/// Fields of a category about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryChanges {
    pub name: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: NewCategory) -> Result<Category>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>>;

    async fn find_by_id_with_trashed(&self, id: Uuid) -> Result<Option<Category>>;

    /// Non-deleted categories ordered by creation time
    async fn list(&self) -> Result<Vec<Category>>;

    /// Returns `None` when `id` is unknown or soft-deleted
    async fn update(&self, id: Uuid, changes: CategoryChanges) -> Result<Option<Category>>;

    /// Returns `false` when there was no active category to delete
    async fn soft_delete(&self, id: Uuid) -> Result<bool>;

    /// Clears `deleted_at`; returns `None` when `id` is unknown
    async fn restore(&self, id: Uuid) -> Result<Option<Category>>;
}
