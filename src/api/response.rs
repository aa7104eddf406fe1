//! JSON response encoding.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

const APPLICATION_JSON: &str = "application/json";

/// Body sent when a response payload cannot be serialized.
pub const ENCODE_FAILURE_BODY: &str = r#"{"errors":"Unable to send response"}"#;

/// Serializes `body` and sends it with `status` and a JSON content type.
///
/// The body is encoded before any header is written, so an encoding failure
/// never leaves a half-written response: it degrades to
/// `422 {"errors": "Unable to send response"}` instead.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_content_type(status, bytes),
        Err(e) => {
            tracing::warn!(error = %e, "Unable to encode JSON response");
            with_json_content_type(
                StatusCode::UNPROCESSABLE_ENTITY,
                ENCODE_FAILURE_BODY.as_bytes().to_vec(),
            )
        }
    }
}

fn with_json_content_type(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
        bytes,
    )
        .into_response()
}
