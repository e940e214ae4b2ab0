//! Runtime selection of the repository backend.

use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::{Config, StorageDriver};
use crate::core::database;
use crate::features::categories::{
    CategoryRepository, InMemoryCategoryRepository, PgCategoryRepository,
};
use crate::features::genres::{GenreRepository, InMemoryGenreRepository, PgGenreRepository};

/// Repository handles shared by the services
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub genres: Arc<dyn GenreRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            genres: Arc::new(PgGenreRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(InMemoryCategoryRepository::new()),
            genres: Arc::new(InMemoryGenreRepository::new()),
        }
    }

    /// Connect to the backend named by `STORAGE_DRIVER`
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        match (config.storage.driver, &config.database) {
            (StorageDriver::Postgres, Some(database)) => {
                let pool = database::connect(database).await?;
                Ok(Self::postgres(pool))
            }
            (StorageDriver::Postgres, None) => Err(anyhow::anyhow!(
                "STORAGE_DRIVER=postgres requires database configuration"
            )),
            (StorageDriver::Memory, _) => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory())
            }
        }
    }
}
