use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use fake::faker::boolean::en::Boolean;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use serde_json::Value;

use crate::core::app::{build_router, Services};
use crate::core::config::SwaggerConfig;
use crate::core::openapi;
use crate::core::storage::Repositories;
use crate::features::categories::repositories::NewCategory;
use crate::features::categories::InMemoryCategoryRepository;
use crate::features::genres::repositories::NewGenre;
use crate::features::genres::InMemoryGenreRepository;
use crate::shared::messages::Locale;

/// Router over in-memory repositories, with direct handles to the storage
pub struct TestApp {
    pub server: TestServer,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub genres: Arc<InMemoryGenreRepository>,
}

pub fn test_app() -> TestApp {
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let genres = Arc::new(InMemoryGenreRepository::new());

    let repositories = Repositories {
        categories: categories.clone(),
        genres: genres.clone(),
    };
    let openapi = openapi::document(&SwaggerConfig {
        title: "Catalog API".to_string(),
        version: "test".to_string(),
        description: "test".to_string(),
    });
    let router = build_router(
        Services::new(repositories, Locale::En),
        &["*".to_string()],
        openapi,
    );

    TestApp {
        server: TestServer::new(router).unwrap(),
        categories,
        genres,
    }
}

pub fn fake_new_category() -> NewCategory {
    NewCategory {
        name: Word().fake(),
        description: Some(Sentence(3..8).fake()),
        is_active: Boolean(50).fake(),
    }
}

pub fn fake_new_genre() -> NewGenre {
    NewGenre {
        name: Word().fake(),
        is_active: Boolean(50).fake(),
    }
}

/// Assert a 422 response carrying `message` under each listed field
pub fn assert_invalidation(response: &TestResponse, expected: &[(&str, &str)]) {
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.json::<Value>();
    assert_eq!(body["message"], "The given data was invalid.");

    for (field, message) in expected {
        let messages = body["errors"][*field]
            .as_array()
            .unwrap_or_else(|| panic!("no errors for field '{}' in {}", field, body));
        assert!(
            messages.iter().any(|m| m == message),
            "expected '{}' for field '{}', got {:?}",
            message,
            field,
            messages
        );
    }
}
