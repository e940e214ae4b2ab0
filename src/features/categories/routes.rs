use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .patch(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/categories/{id}/restore",
            post(handlers::restore_category),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::features::categories::dtos::CategoryResponseDto;
    use crate::features::categories::repositories::{CategoryRepository, NewCategory};
    use crate::shared::test_helpers::{assert_invalidation, fake_new_category, test_app};

    const NAME_REQUIRED: &str = "The name field is required.";
    const NAME_TOO_LONG: &str = "The name may not be greater than 255 characters.";
    const IS_ACTIVE_BOOLEAN: &str = "The is active field must be true or false.";

    fn category_json(dto: &CategoryResponseDto) -> Value {
        serde_json::to_value(dto).unwrap()
    }

    #[tokio::test]
    async fn test_index() {
        let app = test_app();
        let category = app.categories.create(fake_new_category()).await.unwrap();

        let response = app.server.get("/api/categories").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!([category_json(&category.into())])
        );
    }

    #[tokio::test]
    async fn test_index_excludes_trashed() {
        let app = test_app();
        let kept = app.categories.create(fake_new_category()).await.unwrap();
        let trashed = app.categories.create(fake_new_category()).await.unwrap();
        app.categories.soft_delete(trashed.id).await.unwrap();

        let response = app.server.get("/api/categories").await;
        let body = response.json::<Vec<CategoryResponseDto>>();

        assert_eq!(body, vec![CategoryResponseDto::from(kept)]);
    }

    #[tokio::test]
    async fn test_show() {
        let app = test_app();
        let category = app.categories.create(fake_new_category()).await.unwrap();

        let response = app
            .server
            .get(&format!("/api/categories/{}", category.id))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), category_json(&category.into()));
    }

    #[tokio::test]
    async fn test_malformed_id_names_the_category() {
        let app = test_app();

        let response = app.server.get("/api/categories/not-a-uuid").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>()["message"],
            "No query results for category not-a-uuid"
        );
    }

    #[tokio::test]
    async fn test_array_body_is_not_read_by_position() {
        let app = test_app();

        let response = app
            .server
            .post("/api/categories")
            .json(&json!(["test"]))
            .await;

        assert_invalidation(&response, &[("name", NAME_REQUIRED)]);
        assert!(app.categories.list().await.unwrap().is_empty());

        let category = app.categories.create(fake_new_category()).await.unwrap();
        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .json(&json!(["changed", false]))
            .await;

        assert_invalidation(&response, &[("name", NAME_REQUIRED)]);
        assert_eq!(
            app.categories.find_by_id(category.id).await.unwrap(),
            Some(category)
        );
    }

    #[tokio::test]
    async fn test_update_malformed_body() {
        let app = test_app();
        let malformed = r#"{"name":"#;

        let response = app
            .server
            .put(&format!("/api/categories/{}", Uuid::new_v4()))
            .text(malformed)
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let category = app.categories.create(fake_new_category()).await.unwrap();
        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .text(malformed)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            app.categories.find_by_id(category.id).await.unwrap(),
            Some(category)
        );
    }

    #[tokio::test]
    async fn test_unknown_ids_return_not_found() {
        let app = test_app();
        let unknown = format!("/api/categories/{}", Uuid::new_v4());

        assert_eq!(
            app.server.get(&unknown).await.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            app.server
                .put(&unknown)
                .json(&json!({ "name": "test" }))
                .await
                .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            app.server.delete(&unknown).await.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            app.server
                .get("/api/categories/not-a-uuid")
                .await
                .status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_validation_name_required() {
        let app = test_app();
        let data = json!({ "name": "" });

        let response = app.server.post("/api/categories").json(&data).await;
        assert_invalidation(&response, &[("name", NAME_REQUIRED)]);

        let category = app.categories.create(fake_new_category()).await.unwrap();
        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .json(&data)
            .await;
        assert_invalidation(&response, &[("name", NAME_REQUIRED)]);
    }

    #[tokio::test]
    async fn test_validation_empty_body() {
        let app = test_app();

        let response = app.server.post("/api/categories").await;
        assert_invalidation(&response, &[("name", NAME_REQUIRED)]);
    }

    #[tokio::test]
    async fn test_validation_name_length() {
        let app = test_app();
        let data = json!({ "name": "a".repeat(256) });

        let response = app.server.post("/api/categories").json(&data).await;
        assert_invalidation(&response, &[("name", NAME_TOO_LONG)]);

        let category = app.categories.create(fake_new_category()).await.unwrap();
        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .json(&data)
            .await;
        assert_invalidation(&response, &[("name", NAME_TOO_LONG)]);
    }

    #[tokio::test]
    async fn test_validation_is_active() {
        let app = test_app();
        let data = json!({ "is_active": "a" });

        let response = app.server.post("/api/categories").json(&data).await;
        assert_invalidation(
            &response,
            &[("is_active", IS_ACTIVE_BOOLEAN), ("name", NAME_REQUIRED)],
        );

        let category = app.categories.create(fake_new_category()).await.unwrap();
        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .json(&data)
            .await;
        assert_invalidation(
            &response,
            &[("is_active", IS_ACTIVE_BOOLEAN), ("name", NAME_REQUIRED)],
        );
    }

    #[tokio::test]
    async fn test_invalid_store_does_not_persist() {
        let app = test_app();

        let response = app
            .server
            .post("/api/categories")
            .json(&json!({ "name": "a".repeat(256), "is_active": "a" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(app.categories.list().await.unwrap().is_empty());

        let response = app
            .server
            .post("/api/categories")
            .json(&json!({ "name": "test" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(app.categories.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app();

        let response = app.server.post("/api/categories").text("{\"name\":").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(app.categories.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_with_default_values() {
        let app = test_app();

        let response = app
            .server
            .post("/api/categories")
            .json(&json!({ "name": "test" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["name"], "test");
        assert_eq!(body["description"], Value::Null);
        assert_eq!(body["is_active"], true);
        assert_eq!(body["deleted_at"], Value::Null);
        assert!(body["created_at"].is_string());
        assert!(body["updated_at"].is_string());

        let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
        let stored = app.categories.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(body, category_json(&stored.into()));
    }

    #[tokio::test]
    async fn test_store_with_specific_values() {
        let app = test_app();
        let data = json!({ "name": "test", "description": "description", "is_active": false });

        let response = app.server.post("/api/categories").json(&data).await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body = response.json::<CategoryResponseDto>();
        assert_eq!(body.name, "test");
        assert_eq!(body.description.as_deref(), Some("description"));
        assert!(!body.is_active);
        assert_eq!(body.deleted_at, None);

        let stored = app.categories.find_by_id(body.id).await.unwrap().unwrap();
        assert_eq!(CategoryResponseDto::from(stored), body);
    }

    #[tokio::test]
    async fn test_update() {
        let app = test_app();
        let category = app
            .categories
            .create(NewCategory {
                description: Some("description".to_string()),
                is_active: false,
                ..fake_new_category()
            })
            .await
            .unwrap();

        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .json(&json!({ "name": "a", "description": "test", "is_active": true }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<CategoryResponseDto>();
        assert_eq!(body.name, "a");
        assert_eq!(body.description.as_deref(), Some("test"));
        assert!(body.is_active);
        assert_eq!(body.deleted_at, None);
        assert_eq!(body.created_at, category.created_at);

        let stored = app.categories.find_by_id(category.id).await.unwrap().unwrap();
        assert_eq!(CategoryResponseDto::from(stored), body);
    }

    #[tokio::test]
    async fn test_update_with_empty_description() {
        let app = test_app();
        let category = app
            .categories
            .create(NewCategory {
                description: Some("description".to_string()),
                is_active: false,
                ..fake_new_category()
            })
            .await
            .unwrap();

        let response = app
            .server
            .put(&format!("/api/categories/{}", category.id))
            .json(&json!({ "name": "test", "description": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["name"], "test");
        assert_eq!(body["description"], Value::Null);
        assert_eq!(body["is_active"], false);
        assert_eq!(body["deleted_at"], Value::Null);

        let stored = app.categories.find_by_id(category.id).await.unwrap().unwrap();
        assert_eq!(stored.description, None);
        assert!(!stored.is_active);
    }

    #[tokio::test]
    async fn test_patch_is_an_alias_of_put() {
        let app = test_app();
        let category = app.categories.create(fake_new_category()).await.unwrap();

        let response = app
            .server
            .patch(&format!("/api/categories/{}", category.id))
            .json(&json!({ "name": "patched" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<CategoryResponseDto>().name, "patched");
    }

    #[tokio::test]
    async fn test_destroy() {
        let app = test_app();
        let category = app.categories.create(fake_new_category()).await.unwrap();

        let response = app
            .server
            .delete(&format!("/api/categories/{}", category.id))
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());
        assert_eq!(app.categories.find_by_id(category.id).await.unwrap(), None);
        assert!(app
            .categories
            .find_by_id_with_trashed(category.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_restore() {
        let app = test_app();
        let category = app.categories.create(fake_new_category()).await.unwrap();
        app.categories.soft_delete(category.id).await.unwrap();

        let response = app
            .server
            .post(&format!("/api/categories/{}/restore", category.id))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            category_json(&category.clone().into())
        );
        assert_eq!(
            app.categories.find_by_id(category.id).await.unwrap(),
            Some(category)
        );

        let response = app
            .server
            .post(&format!("/api/categories/{}/restore", Uuid::new_v4()))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
