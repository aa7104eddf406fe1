mod common;

use urlshort::domain::entities::PathMapping;
use urlshort::domain::repositories::PathMappingRepository;
use urlshort::error::StoreError;
use urlshort::infrastructure::persistence::{SqlPathMappingRepository, StoreOptions};

#[tokio::test]
async fn test_create_then_find_round_trip() {
    let repo = common::create_test_repository().await;

    repo.create(PathMapping::new("a", "http://x")).await.unwrap();

    let found = repo.find_by_path("a").await.unwrap();
    assert_eq!(found, Some(PathMapping::new("a", "http://x")));
}

#[tokio::test]
async fn test_find_by_path_not_found() {
    let repo = common::create_test_repository().await;

    let result = repo.find_by_path("missing").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_create_duplicate_path_is_rejected() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;

    let result = repo.create(PathMapping::new("a", "http://other")).await;

    assert!(matches!(result, Err(StoreError::DuplicateKey { ref path }) if path == "a"));

    let found = repo.find_by_path("a").await.unwrap().unwrap();
    assert_eq!(found.url, "http://x");
}

#[tokio::test]
async fn test_upsert_inserts_when_absent() {
    let repo = common::create_test_repository().await;

    repo.upsert(PathMapping::new("a", "http://y")).await.unwrap();

    let found = repo.find_by_path("a").await.unwrap().unwrap();
    assert_eq!(found.url, "http://y");
}

#[tokio::test]
async fn test_upsert_twice_leaves_single_record() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;

    repo.upsert(PathMapping::new("a", "http://y")).await.unwrap();
    repo.upsert(PathMapping::new("a", "http://y")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
    let found = repo.find_by_path("a").await.unwrap().unwrap();
    assert_eq!(found.url, "http://y");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;

    assert!(repo.delete("a").await.unwrap());
    assert!(!repo.delete("a").await.unwrap());

    assert!(repo.find_by_path("a").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_leaves_other_paths() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;
    common::create_test_mapping(&repo, "b", "http://y").await;

    repo.delete("a").await.unwrap();

    assert!(repo.find_by_path("b").await.unwrap().is_some());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_list_is_ordered_by_path() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "zeta", "http://z").await;
    common::create_test_mapping(&repo, "alpha", "http://a").await;

    let mappings = repo.list().await.unwrap();

    assert_eq!(
        mappings,
        vec![
            PathMapping::new("alpha", "http://a"),
            PathMapping::new("zeta", "http://z"),
        ]
    );
}

#[tokio::test]
async fn test_url_is_stored_verbatim() {
    let repo = common::create_test_repository().await;

    repo.create(PathMapping::new("odd", "not a url at all")).await.unwrap();

    let found = repo.find_by_path("odd").await.unwrap().unwrap();
    assert_eq!(found.url, "not a url at all");
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "a", "http://x").await;

    repo.initialize().await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_queries_fail_after_close() {
    let repo = common::create_test_repository().await;
    repo.close().await;

    assert!(matches!(
        repo.find_by_path("a").await,
        Err(StoreError::Query(_))
    ));
    assert!(matches!(
        repo.upsert(PathMapping::new("a", "http://x")).await,
        Err(StoreError::Write(_))
    ));
    assert!(matches!(repo.ping().await, Err(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_connect_to_unreachable_store_fails() {
    let options = StoreOptions::new("sqlite:///nonexistent-dir/for/urlshort/test.db?mode=ro");

    let result = SqlPathMappingRepository::connect(&options).await;

    assert!(matches!(result, Err(StoreError::Connection(_))));
}
