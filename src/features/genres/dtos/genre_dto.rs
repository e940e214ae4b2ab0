use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::features::genres::models::Genre;
use crate::shared::validation::{self, present};

/// Request body for creating or updating a genre
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GenrePayload {
    /// Required, at most 255 characters
    #[serde(default, deserialize_with = "present")]
    #[validate(required, custom(function = "validation::validate_name"))]
    #[schema(value_type = String, example = "Drama")]
    pub name: Option<Value>,

    /// Defaults to true on creation
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validation::validate_boolean"))]
    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreInput {
    pub name: String,
    pub is_active: Option<bool>,
}

impl GenrePayload {
    pub fn into_input(self) -> Result<GenreInput, ValidationErrors> {
        let payload = Self {
            name: validation::normalize(self.name),
            is_active: validation::normalize(self.is_active),
        };
        payload.validate()?;

        Ok(GenreInput {
            name: payload
                .name
                .and_then(validation::as_string)
                .unwrap_or_default(),
            is_active: payload.is_active.as_ref().and_then(validation::as_boolean),
        })
    }
}

/// Response DTO for genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreResponseDto {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Genre> for GenreResponseDto {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
            is_active: g.is_active,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}
