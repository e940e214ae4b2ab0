use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Field name to messages, present on validation failures only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation(message: impl Into<String>, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// A record type addressable by id, named in not-found messages
pub trait Resource {
    const NAME: &'static str;
}
