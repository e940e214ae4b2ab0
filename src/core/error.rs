use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::messages::Locale;
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Render field errors with the messages of `locale`
    pub fn validation(errors: &ValidationErrors, locale: Locale) -> Self {
        AppError::Validation {
            message: locale.invalid_data().to_string(),
            errors: locale.render(errors),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("No query results for {} {}", resource, id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message("Database error occurred"),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::message(msg)),
            AppError::Validation { message, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::validation(message, errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::message(msg)),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
