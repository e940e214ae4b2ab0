use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::genres::{dtos as genres_dtos, handlers as genres_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::restore_category,
        // Genres
        genres_handlers::list_genres,
        genres_handlers::get_genre,
        genres_handlers::create_genre,
        genres_handlers::update_genre,
        genres_handlers::delete_genre,
    ),
    components(
        schemas(
            ErrorResponse,
            categories_dtos::CategoryPayload,
            categories_dtos::CategoryResponseDto,
            genres_dtos::GenrePayload,
            genres_dtos::GenreResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Catalog categories (soft-deleted, restorable)"),
        (name = "genres", description = "Catalog genres"),
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "API documentation for the catalog service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// OpenAPI document with info taken from config
pub fn document(config: &SwaggerConfig) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(config).modify(&mut openapi);
    openapi
}
