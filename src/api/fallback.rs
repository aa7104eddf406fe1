//! Responders for requests that match no stored mapping.
//!
//! A [`Fallback`] is injected into [`crate::state::AppState`] at startup. The
//! redirect handler delegates to it on a lookup miss, and the top-level router
//! uses it for paths that match no route at all.

use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::FallbackMode;

/// Plain-text body of the default 404 page.
pub const NOT_FOUND_BODY: &str = "The path you are looking for does not exist\n";

/// Capability to answer a request the service itself cannot serve.
#[async_trait]
pub trait Fallback: Send + Sync {
    async fn handle(&self, request: Request) -> Response;
}

/// Static `404 Not Found` page.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundPage;

#[async_trait]
impl Fallback for NotFoundPage {
    async fn handle(&self, _request: Request) -> Response {
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}

/// Hands the request, untouched, to another router.
#[derive(Clone)]
pub struct RouterFallback {
    router: Router,
}

impl RouterFallback {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Fallback for RouterFallback {
    async fn handle(&self, request: Request) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {})
    }
}

/// General-purpose router that echoes the requested path.
pub fn echo_router() -> Router {
    Router::new().fallback(echo_handler)
}

async fn echo_handler(uri: Uri) -> String {
    format!("Hello, you've requested: {}\n", uri.path())
}

/// Builds the fallback selected by configuration.
pub fn from_mode(mode: FallbackMode) -> Arc<dyn Fallback> {
    match mode {
        FallbackMode::NotFound => Arc::new(NotFoundPage),
        FallbackMode::Echo => Arc::new(RouterFallback::new(echo_router())),
    }
}
