use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, ResourceId};
use crate::features::categories::dtos::{CategoryPayload, CategoryResponseDto};
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories that are not soft-deleted
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    ResourceId { id, .. }: ResourceId<Category>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get(id).await?;
    Ok(Json(category))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(payload): AppJson<CategoryPayload>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    let category = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Category ID")
    ),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    ResourceId { id, .. }: ResourceId<Category>,
    payload: std::result::Result<AppJson<CategoryPayload>, AppError>,
) -> Result<Json<CategoryResponseDto>> {
    let AppJson(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            // An unknown id is reported ahead of an unreadable body
            service.get(id).await?;
            return Err(rejection);
        }
    };

    let category = service.update(id, payload).await?;
    Ok(Json(category))
}

/// Delete a category (soft delete)
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    ResourceId { id, .. }: ResourceId<Category>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Restore a soft-deleted category
#[utoipa::path(
    post,
    path = "/api/categories/{id}/restore",
    params(
        ("id" = uuid::Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category restored", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn restore_category(
    State(service): State<Arc<CategoryService>>,
    ResourceId { id, .. }: ResourceId<Category>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.restore(id).await?;
    Ok(Json(category))
}
