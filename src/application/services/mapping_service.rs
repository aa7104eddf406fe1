//! Path mapping lookup and mutation service.

use std::sync::Arc;

use crate::domain::entities::PathMapping;
use crate::domain::repositories::PathMappingRepository;
use crate::error::StoreError;

/// Service in front of the path mapping store.
///
/// Handlers call this rather than the repository so that logging and
/// metrics for every operation live in one place. The service adds no
/// coordination of its own: concurrent writes to the same path race in the
/// store and the last committed write wins.
pub struct MappingService<R: PathMappingRepository> {
    repository: Arc<R>,
}

impl<R: PathMappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up the destination for `path`.
    ///
    /// A miss is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the lookup fails.
    pub async fn resolve(&self, path: &str) -> Result<Option<PathMapping>, StoreError> {
        let result = self.repository.find_by_path(path).await;

        let outcome = match &result {
            Ok(Some(_)) => "hit",
            Ok(None) => "miss",
            Err(_) => "error",
        };
        metrics::counter!("redirect_lookups_total", "outcome" => outcome).increment(1);

        result
    }

    /// Stores a new mapping. Existing paths are rejected, not overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the path is taken.
    /// Returns [`StoreError::Write`] on other write failures.
    pub async fn create(&self, mapping: PathMapping) -> Result<(), StoreError> {
        let path = mapping.path.clone();
        let result = self.repository.create(mapping).await;
        record_mutation("create", &result);

        match &result {
            Ok(()) => tracing::info!(path = %path, "Mapping created"),
            Err(e) => tracing::warn!(path = %path, error = %e, "Mapping create rejected"),
        }

        result
    }

    /// Stores a mapping, overwriting the URL if the path already exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the write fails.
    pub async fn update(&self, mapping: PathMapping) -> Result<(), StoreError> {
        let path = mapping.path.clone();
        let result = self.repository.upsert(mapping).await;
        record_mutation("update", &result);

        match &result {
            Ok(()) => tracing::info!(path = %path, "Mapping updated"),
            Err(e) => tracing::warn!(path = %path, error = %e, "Mapping update rejected"),
        }

        result
    }

    /// Removes the mapping for `path`. Removing an unknown path succeeds.
    ///
    /// Returns whether a mapping existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the delete fails.
    pub async fn delete(&self, path: &str) -> Result<bool, StoreError> {
        let result = self.repository.delete(path).await;
        record_mutation("delete", &result);

        match &result {
            Ok(existed) => tracing::info!(path = %path, existed, "Mapping deleted"),
            Err(e) => tracing::warn!(path = %path, error = %e, "Mapping delete rejected"),
        }

        result
    }

    /// Lists all mappings ordered by path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] on database errors.
    pub async fn list(&self) -> Result<Vec<PathMapping>, StoreError> {
        self.repository.list().await
    }

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] on database errors.
    pub async fn count(&self) -> Result<i64, StoreError> {
        self.repository.count().await
    }

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if it does not.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}

fn record_mutation<T>(op: &'static str, result: &Result<T, StoreError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(StoreError::DuplicateKey { .. }) => "conflict",
        Err(_) => "error",
    };
    metrics::counter!("mapping_mutations_total", "op" => op, "outcome" => outcome).increment(1);
}
