//! Per-request timeout middleware.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Fails requests that take longer than `timeout` with `408 Request Timeout`.
///
/// The in-flight store call is not cancelled at the database; only the
/// response is abandoned.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
