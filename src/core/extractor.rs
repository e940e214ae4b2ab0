use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::shared::types::Resource;

/// JSON body extractor with consistent error responses.
///
/// Request input is keyed by field name: an empty body decodes as `{}`, and
/// a body that is valid JSON but not an object carries no fields at all.
/// Either way the payload reaches validation and reports missing fields
/// instead of being decoded positionally or failing as malformed.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        let fields = if bytes.iter().all(u8::is_ascii_whitespace) {
            Map::new()
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(fields)) => fields,
                Ok(_) => Map::new(),
                Err(e) => return Err(AppError::BadRequest(format!("Invalid JSON body: {}", e))),
            }
        };

        serde_json::from_value(Value::Object(fields))
            .map(AppJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }
}

/// Path identifier of a `R` record.
///
/// Anything that is not a UUID cannot name a stored record, so it is
/// rejected as not found rather than as a bad request.
#[derive(Debug)]
pub struct ResourceId<R> {
    pub id: Uuid,
    resource: PhantomData<fn() -> R>,
}

impl<R, S> FromRequestParts<S> for ResourceId<R>
where
    R: Resource,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let id = Uuid::parse_str(&raw).map_err(|_| AppError::not_found(R::NAME, &raw))?;
        Ok(Self {
            id,
            resource: PhantomData,
        })
    }
}
