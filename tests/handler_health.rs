mod common;

use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use urlshort::api::fallback::NotFoundPage;
use urlshort::infrastructure::persistence::{SqlPathMappingRepository, StoreOptions};

#[tokio::test]
async fn test_health_reports_healthy_store() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;
    let server = common::create_test_server(repo);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["database"]["message"], "Connected, 1 mappings");
}

#[tokio::test]
async fn test_health_reports_unreachable_store() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server(repo.clone());
    repo.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_health_survives_count_failure() {
    // No table: the ping answers but counting rows fails.
    let repo = SqlPathMappingRepository::connect(&StoreOptions::new("sqlite::memory:"))
        .await
        .unwrap();
    let server = common::create_test_server_with_fallback(Arc::new(repo), Arc::new(NotFoundPage));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["message"], "Connected");
}
