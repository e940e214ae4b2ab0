use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::middleware;
use crate::core::storage::Repositories;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::genres::{routes as genres_routes, GenreService};
use crate::shared::messages::Locale;

/// Services handed to the feature routers
pub struct Services {
    pub categories: Arc<CategoryService>,
    pub genres: Arc<GenreService>,
}

impl Services {
    pub fn new(repositories: Repositories, locale: Locale) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(repositories.categories, locale)),
            genres: Arc::new(GenreService::new(repositories.genres, locale)),
        }
    }
}

// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the application router with every feature and the HTTP middleware stack
pub fn build_router(
    services: Services,
    cors_allowed_origins: &[String],
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(categories_routes::routes(services.categories))
        .merge(genres_routes::routes(services.genres))
        .route("/health", get(health_check))
        .layer(middleware::cors_layer(cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
