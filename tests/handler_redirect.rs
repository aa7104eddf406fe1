mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use urlshort::api::fallback::{NotFoundPage, RouterFallback, echo_router};
use urlshort::routes::app_router;

#[tokio::test]
async fn test_redirect_to_stored_url() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "docs", "https://example.com/docs").await;
    let server = common::create_test_server(repo);

    let response = server.get("/docs").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/docs");
}

#[tokio::test]
async fn test_redirect_uses_stored_value_verbatim() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "rel", "/somewhere/else?q=1").await;
    let server = common::create_test_server(repo);

    let response = server.get("/rel").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/somewhere/else?q=1");
}

#[tokio::test]
async fn test_unknown_path_returns_not_found_page() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server(repo);

    let response = server.get("/nope").await;

    response.assert_status_not_found();
    assert_eq!(
        response.text(),
        "The path you are looking for does not exist\n"
    );
}

#[tokio::test]
async fn test_nested_path_goes_to_fallback() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;
    let server = common::create_test_server(repo);

    let response = server.get("/a/b").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_echo_fallback_receives_original_request() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server_with_fallback(
        repo,
        Arc::new(RouterFallback::new(echo_router())),
    );

    let response = server.get("/nope").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Hello, you've requested: /nope\n");
}

#[tokio::test]
async fn test_echo_fallback_for_unrouted_path() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server_with_fallback(
        repo,
        Arc::new(RouterFallback::new(echo_router())),
    );

    let response = server.get("/deep/nested/path").await;

    response.assert_status_ok();
    assert_eq!(
        response.text(),
        "Hello, you've requested: /deep/nested/path\n"
    );
}

#[tokio::test]
async fn test_redirect_after_delete_falls_back() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "gone", "http://x").await;
    let server = common::create_test_server(repo);

    server.delete("/urls/gone").await.assert_status(StatusCode::NO_CONTENT);

    server.get("/gone").await.assert_status_not_found();
}

#[tokio::test]
async fn test_lookup_failure_returns_server_error() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server(repo.clone());
    repo.close().await;

    let response = server.get("/docs").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["errors"], "Unable to look up path");
}

#[tokio::test]
async fn test_index_banner() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server(repo);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().starts_with("urlshort "));
}

#[tokio::test]
async fn test_undecodable_path_goes_to_fallback() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server(repo);

    let response = server.get("/%FF").await;

    response.assert_status_not_found();
    assert_eq!(
        response.text(),
        "The path you are looking for does not exist\n"
    );
}

#[tokio::test]
async fn test_undecodable_path_reaches_echo_fallback() {
    let repo = common::create_test_repository().await;
    let server = common::create_test_server_with_fallback(
        repo,
        Arc::new(RouterFallback::new(echo_router())),
    );

    let response = server.get("/%FF").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Hello, you've requested: /%FF\n");
}

#[tokio::test]
async fn test_app_router_trims_trailing_slash() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "docs", "http://x").await;
    let state = common::create_test_state(repo, Arc::new(NotFoundPage));
    let app = app_router(state, Duration::from_secs(15));

    let request = Request::builder()
        .uri("/docs/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "http://x");
}
