//! Handler for path redirects.

use axum::{
    extract::{Path, Request, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a stored path to its destination URL.
///
/// # Endpoint
///
/// `GET /{path}`
///
/// # Request Flow
///
/// 1. Look up `path` in the store (every lookup is a live query)
/// 2. On a hit, return `302 Found` with `Location` set to the stored URL
/// 3. On a miss, hand the untouched request to the configured fallback
///
/// A path segment that does not percent-decode to UTF-8 can never be a
/// stored key, so it is treated as a miss.
///
/// # Errors
///
/// Returns 500 if the lookup fails or the stored URL cannot be sent as a
/// `Location` header. Only this request fails; the service keeps running.
pub async fn redirect_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    request: Request,
) -> Result<Response, AppError> {
    let Ok(Path(path)) = path else {
        debug!(uri = %request.uri(), "Undecodable path, using fallback");
        return Ok(state.fallback.handle(request).await);
    };

    let mapping = state.mapping_service.resolve(&path).await.map_err(|e| {
        error!(path = %path, error = %e, "Path lookup failed");
        AppError::internal("Unable to look up path")
    })?;

    let Some(mapping) = mapping else {
        debug!(path = %path, "No mapping, using fallback");
        return Ok(state.fallback.handle(request).await);
    };

    let location = HeaderValue::try_from(mapping.url.as_str()).map_err(|e| {
        error!(path = %path, error = %e, "Stored URL is not a valid Location header");
        AppError::internal("Unable to redirect to stored URL")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Sends requests that match no route to the configured fallback.
pub async fn unmatched_handler(State(state): State<AppState>, request: Request) -> Response {
    state.fallback.handle(request).await
}
