use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::types::Resource;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Whether the category has been soft-deleted
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Resource for Category {
    const NAME: &'static str = "category";
}
