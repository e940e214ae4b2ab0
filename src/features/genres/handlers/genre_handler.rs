use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, ResourceId};
use crate::features::genres::dtos::{GenrePayload, GenreResponseDto};
use crate::features::genres::models::Genre;
use crate::features::genres::services::GenreService;
use crate::shared::types::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<GenreResponseDto>),
    ),
    tag = "genres"
)]
pub async fn list_genres(
    State(service): State<Arc<GenreService>>,
) -> Result<Json<Vec<GenreResponseDto>>> {
    Ok(Json(service.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre found", body = GenreResponseDto),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "genres"
)]
pub async fn get_genre(
    State(service): State<Arc<GenreService>>,
    ResourceId { id, .. }: ResourceId<Genre>,
) -> Result<Json<GenreResponseDto>> {
    Ok(Json(service.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/genres",
    request_body = GenrePayload,
    responses(
        (status = 201, description = "Genre created", body = GenreResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "genres"
)]
pub async fn create_genre(
    State(service): State<Arc<GenreService>>,
    AppJson(payload): AppJson<GenrePayload>,
) -> Result<(StatusCode, Json<GenreResponseDto>)> {
    let genre = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Genre ID")
    ),
    request_body = GenrePayload,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "genres"
)]
pub async fn update_genre(
    State(service): State<Arc<GenreService>>,
    ResourceId { id, .. }: ResourceId<Genre>,
    payload: std::result::Result<AppJson<GenrePayload>, AppError>,
) -> Result<Json<GenreResponseDto>> {
    let AppJson(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            // An unknown id is reported ahead of an unreadable body
            service.get(id).await?;
            return Err(rejection);
        }
    };

    Ok(Json(service.update(id, payload).await?))
}

/// Delete a genre permanently
#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    params(
        ("id" = uuid::Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "genres"
)]
pub async fn delete_genre(
    State(service): State<Arc<GenreService>>,
    ResourceId { id, .. }: ResourceId<Genre>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
