use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::features::categories::models::Category;
use crate::shared::validation::{self, present};

/// Request body for creating or updating a category
///
/// Fields are kept as raw JSON so that type errors are reported alongside
/// the other validation failures.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CategoryPayload {
    /// Required, at most 255 characters
    #[serde(default, deserialize_with = "present")]
    #[validate(required, custom(function = "validation::validate_name"))]
    #[schema(value_type = String, example = "Documentary")]
    pub name: Option<Value>,

    /// Optional; an empty string is stored as null
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validation::validate_nullable_string"))]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,

    /// Defaults to true on creation. Accepts true, false, 1, 0, "1", "0"
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validation::validate_boolean"))]
    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Value>,
}

/// Validated category fields
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInput {
    pub name: String,
    /// `None` when the key was absent, `Some(None)` when it was null or empty
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl CategoryPayload {
    fn normalized(self) -> Self {
        Self {
            name: validation::normalize(self.name),
            description: validation::normalize(self.description),
            is_active: validation::normalize(self.is_active),
        }
    }

    /// Normalize, then run every field rule, collecting all failures
    pub fn into_input(self) -> Result<CategoryInput, ValidationErrors> {
        let payload = self.normalized();
        payload.validate()?;

        Ok(CategoryInput {
            name: payload
                .name
                .and_then(validation::as_string)
                .unwrap_or_default(),
            description: payload.description.map(validation::as_string),
            is_active: payload.is_active.as_ref().and_then(validation::as_boolean),
        })
    }
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
            deleted_at: c.deleted_at,
        }
    }
}
