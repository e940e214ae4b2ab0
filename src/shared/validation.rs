//! Field rules shared by the category and genre payloads.
//!
//! Payload fields arrive as raw JSON values so that a wrongly-typed field is
//! reported next to every other failing field instead of aborting decoding.
//! Payloads derive `Validate` and point their fields at the `custom` rules
//! below; `normalize` runs first so the rules see trimmed values.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{ValidateLength, ValidationError};

pub const RULE_REQUIRED: &str = "required";
pub const RULE_MAX: &str = "max";
pub const RULE_BOOLEAN: &str = "boolean";
pub const RULE_STRING: &str = "string";

/// Maximum number of characters for `name` fields
pub const NAME_MAX_LENGTH: u64 = 255;

/// Keep explicit `null` distinguishable from a missing key.
///
/// Use together with `#[serde(default)]`: a missing key stays `None`, while
/// `null` becomes `Some(Value::Null)`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Trim strings and convert empty strings to null
pub fn normalize(value: Option<Value>) -> Option<Value> {
    value.map(|v| match v {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else if trimmed.len() == s.len() {
                Value::String(s)
            } else {
                Value::String(trimmed.to_string())
            }
        }
        other => other,
    })
}

pub fn max_length_error(max: u64) -> ValidationError {
    let mut error = ValidationError::new(RULE_MAX);
    error.add_param(Cow::from("max"), &max);
    error
}

/// Present `name`: non-null string of at most `NAME_MAX_LENGTH` characters
pub fn validate_name(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(ValidationError::new(RULE_REQUIRED)),
        Value::String(s) if s.validate_length(None, Some(NAME_MAX_LENGTH), None) => Ok(()),
        Value::String(_) => Err(max_length_error(NAME_MAX_LENGTH)),
        _ => Err(ValidationError::new(RULE_STRING)),
    }
}

pub fn validate_nullable_string(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null | Value::String(_) => Ok(()),
        _ => Err(ValidationError::new(RULE_STRING)),
    }
}

pub fn validate_boolean(value: &Value) -> Result<(), ValidationError> {
    as_boolean(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new(RULE_BOOLEAN))
}

/// Accepts `true`, `false`, `1`, `0`, `"1"` and `"0"`
pub fn as_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn as_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}
