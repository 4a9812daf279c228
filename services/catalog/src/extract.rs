//! Extractor wrappers that report rejections as [`CatalogServiceError`].

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CatalogServiceError;

/// `axum::Json`, restricted to JSON objects. A missing, malformed or
/// non-object body becomes a 400 `INVALID_BODY`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CatalogServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        // serde would otherwise fill struct fields from an array by position
        if !value.is_object() {
            return Err(CatalogServiceError::InvalidBody(
                "expected a JSON object".to_owned(),
            ));
        }
        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| CatalogServiceError::InvalidBody(e.to_string()))
    }
}

/// Integer `{id}` path segment; anything else becomes a 400 `INVALID_PATH`.
#[derive(FromRequestParts)]
#[from_request(rejection(CatalogServiceError))]
pub struct IdPath(#[from_request(via(axum::extract::Path))] pub i32);
