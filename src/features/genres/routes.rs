use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::genres::handlers;
use crate::features::genres::services::GenreService;

/// Create routes for the genres feature
pub fn routes(service: Arc<GenreService>) -> Router {
    Router::new()
        .route(
            "/api/genres",
            get(handlers::list_genres).post(handlers::create_genre),
        )
        .route(
            "/api/genres/{id}",
            get(handlers::get_genre)
                .put(handlers::update_genre)
                .patch(handlers::update_genre)
                .delete(handlers::delete_genre),
        )
        .with_state(service)
}
