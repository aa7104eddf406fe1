//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The store answers a ping
/// - **503 Service Unavailable**: The store is unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 3 mappings" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity with a ping, then reports the row count.
async fn check_database(state: &AppState) -> CheckStatus {
    if let Err(e) = state.mapping_service.health_check().await {
        return CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        };
    }

    let message = match state.mapping_service.count().await {
        Ok(count) => format!("Connected, {} mappings", count),
        Err(e) => {
            tracing::warn!(error = %e, "Mapping count failed during health check");
            "Connected".to_string()
        }
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message),
    }
}
