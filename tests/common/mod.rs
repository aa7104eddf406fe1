#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use urlshort::api::fallback::{Fallback, NotFoundPage};
use urlshort::application::services::MappingService;
use urlshort::domain::entities::PathMapping;
use urlshort::domain::repositories::PathMappingRepository;
use urlshort::infrastructure::persistence::{SqlPathMappingRepository, StoreOptions};
use urlshort::routes::build_router;
use urlshort::state::AppState;

/// Opens a fresh in-memory SQLite store with `url_table` created.
pub async fn create_test_repository() -> Arc<SqlPathMappingRepository> {
    let repository = SqlPathMappingRepository::connect(&StoreOptions::new("sqlite::memory:"))
        .await
        .unwrap();
    repository.initialize().await.unwrap();
    Arc::new(repository)
}

pub async fn create_test_mapping(repository: &SqlPathMappingRepository, path: &str, url: &str) {
    repository
        .create(PathMapping::new(path, url))
        .await
        .unwrap();
}

pub fn create_test_state(
    repository: Arc<SqlPathMappingRepository>,
    fallback: Arc<dyn Fallback>,
) -> AppState {
    AppState::new(Arc::new(MappingService::new(repository)), fallback)
}

/// Test server over the full router with the 404 fallback.
pub fn create_test_server(repository: Arc<SqlPathMappingRepository>) -> TestServer {
    create_test_server_with_fallback(repository, Arc::new(NotFoundPage))
}

pub fn create_test_server_with_fallback(
    repository: Arc<SqlPathMappingRepository>,
    fallback: Arc<dyn Fallback>,
) -> TestServer {
    let state = create_test_state(repository, fallback);
    TestServer::new(build_router(state, Duration::from_secs(15))).unwrap()
}
