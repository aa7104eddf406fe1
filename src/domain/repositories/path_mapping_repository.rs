//! Repository trait for path mapping data access.

use crate::domain::entities::PathMapping;
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for path mappings.
///
/// Every method is a single statement against the backing store; no method
/// opens a transaction spanning several calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlPathMappingRepository`] - SQLx implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PathMappingRepository: Send + Sync {
    /// Finds the mapping stored under `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PathMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] only when the query itself fails.
    async fn find_by_path(&self, path: &str) -> Result<Option<PathMapping>, StoreError>;

    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if `path` already exists.
    /// Returns [`StoreError::Write`] on any other write failure.
    async fn create(&self, mapping: PathMapping) -> Result<(), StoreError>;

    /// Inserts the mapping, or overwrites `url` if `path` already exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the write fails.
    async fn upsert(&self, mapping: PathMapping) -> Result<(), StoreError>;

    /// Removes the mapping for `path`.
    ///
    /// Returns `Ok(true)` if a row was removed and `Ok(false)` if the path did
    /// not exist. Both are successes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the delete fails.
    async fn delete(&self, path: &str) -> Result<bool, StoreError>;

    /// Lists every mapping ordered by path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] on database errors.
    async fn list(&self) -> Result<Vec<PathMapping>, StoreError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Round-trips a trivial statement to check connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the store does not answer.
    async fn ping(&self) -> Result<(), StoreError>;
}
