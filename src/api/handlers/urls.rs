//! Handlers for mapping management endpoints (create, update, delete).
//!
//! POST is insert-only: creating a path that already exists is rejected with
//! 400 and the stored URL is left untouched. PUT is the overwrite path.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::mapping::{MappingRequest, MessageResponse};
use crate::api::extract::JsonBody;
use crate::api::response::json_response;
use crate::domain::entities::PathMapping;
use crate::error::{AppError, StoreError};
use crate::state::AppState;
use crate::utils::path_key::normalize_path_key;

/// Creates a new path mapping.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "path": "docs", "url": "https://example.com/docs" }
/// ```
///
/// # Response
///
/// `201 Created` with `{"message": "successfully created"}`.
///
/// # Errors
///
/// Returns 422 if the body is not a valid mapping.
/// Returns 400 if the path already exists or the insert fails.
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MappingRequest>,
) -> Result<Response, AppError> {
    let mapping = into_mapping(payload)?;

    state
        .mapping_service
        .create(mapping)
        .await
        .map_err(|e| match e {
            StoreError::DuplicateKey { .. } => AppError::write("Path already exists"),
            _ => AppError::write("Unable to insert into DB"),
        })?;

    Ok(json_response(StatusCode::CREATED, &MessageResponse::CREATED))
}

/// Creates or overwrites a path mapping.
///
/// # Endpoint
///
/// `PUT /urls`
///
/// # Response
///
/// `201 Created` with `{"message": "successfully updated"}`, whether or not
/// the path existed before.
///
/// # Errors
///
/// Returns 422 if the body is not a valid mapping.
/// Returns 400 if the write fails.
pub async fn update_mapping_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MappingRequest>,
) -> Result<Response, AppError> {
    let mapping = into_mapping(payload)?;

    state
        .mapping_service
        .update(mapping)
        .await
        .map_err(|_| AppError::write("Unable to update DB"))?;

    Ok(json_response(StatusCode::CREATED, &MessageResponse::UPDATED))
}

/// Deletes a path mapping.
///
/// # Endpoint
///
/// `DELETE /urls/{path}`
///
/// # Behavior
///
/// Returns `204 No Content` with an empty body whether or not the path
/// existed, so repeating a delete is harmless. A key that could never be
/// stored is treated as absent and the store is not consulted.
///
/// # Errors
///
/// Returns 400 if the delete fails.
pub async fn delete_mapping_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let Ok(path) = normalize_path_key(&path) else {
        debug!(path = %path, "Unstorable key, nothing to delete");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    state
        .mapping_service
        .delete(&path)
        .await
        .map_err(|_| AppError::write("Unable to remove path from DB"))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Answers any verb the mapping routes do not serve.
pub async fn method_not_allowed_handler() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "METHOD NOT ALLOWED")
}

/// Validates a request body and turns it into a storable mapping.
///
/// The URL must be usable as a `Location` header value, otherwise the
/// mapping could be stored but never served.
fn into_mapping(payload: MappingRequest) -> Result<PathMapping, AppError> {
    payload.validate()?;

    let path = normalize_path_key(&payload.path).map_err(|e| AppError::decode(e.to_string()))?;

    if HeaderValue::from_str(&payload.url).is_err() {
        return Err(AppError::decode("Invalid fields: url"));
    }

    Ok(PathMapping::new(path, payload.url))
}
