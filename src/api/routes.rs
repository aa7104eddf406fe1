//! API route configuration.

use crate::api::handlers::{
    create_mapping_handler, delete_mapping_handler, method_not_allowed_handler,
    update_mapping_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Mapping management routes.
///
/// # Endpoints
///
/// - `POST   /urls`         - Create a mapping (rejects existing paths)
/// - `PUT    /urls`         - Create or overwrite a mapping
/// - `DELETE /urls/{path}`  - Delete a mapping
///
/// Any other verb on these paths answers `405` in plain text.
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/urls",
            post(create_mapping_handler)
                .put(update_mapping_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/urls/{path}",
            delete(delete_mapping_handler).fallback(method_not_allowed_handler),
        )
}
