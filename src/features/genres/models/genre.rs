use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::types::Resource;

/// Database model for genre
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Genre {
    const NAME: &'static str = "genre";
}
