//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Message returned when a request body is not the expected JSON.
pub const PARSE_FAILURE: &str = "Unable to parse JSON";

/// JSON body extractor that rejects with a 422 `{"errors": ...}` envelope.
///
/// Unlike [`axum::Json`], the `Content-Type` header is not inspected: any
/// body that deserializes into `T` is accepted, and anything else (including
/// an empty body) is a decode failure.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "Unable to read request body");
            AppError::decode(PARSE_FAILURE)
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::warn!(error = %e, "Unable to parse JSON");
            AppError::decode(PARSE_FAILURE)
        })
    }
}
