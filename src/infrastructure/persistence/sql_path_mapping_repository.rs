//! SQLx implementation of the path mapping repository.
//!
//! Runs on the `Any` driver so the same statements serve PostgreSQL
//! (`postgres://`) and SQLite (`sqlite:`). Placeholders use the `$N` form,
//! which both backends accept.

use async_trait::async_trait;
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::PathMapping;
use crate::domain::repositories::PathMappingRepository;
use crate::error::StoreError;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS url_table (path TEXT UNIQUE, url TEXT)";

/// Connection settings for the store.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub database_url: String,
    pub max_connections: u32,
    pub connect_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    pub max_lifetime_seconds: u64,
    /// Additional connection attempts at startup before giving up.
    pub connect_retries: usize,
}

impl StoreOptions {
    /// Options with default pool settings for `database_url`.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            connect_timeout_seconds: 30,
            idle_timeout_seconds: 600,
            max_lifetime_seconds: 1800,
            connect_retries: 0,
        }
    }

    /// Returns true for SQLite databases that live only in process memory.
    ///
    /// Every connection to such a database sees its own copy, so the pool is
    /// pinned to a single connection that is never recycled.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("sqlite:")
            && (self.database_url.contains(":memory:") || self.database_url.contains("mode=memory"))
    }

    fn pool_options(&self) -> AnyPoolOptions {
        let options = AnyPoolOptions::new()
            .acquire_timeout(Duration::from_secs(self.connect_timeout_seconds));

        if self.is_in_memory() {
            options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options
                .max_connections(self.max_connections)
                .idle_timeout(Duration::from_secs(self.idle_timeout_seconds))
                .max_lifetime(Duration::from_secs(self.max_lifetime_seconds))
        }
    }
}

/// SQL-backed store for path mappings.
///
/// Owns the connection pool. The pool is shared by every request; the store
/// has no in-process cache, so each lookup is a live query.
pub struct SqlPathMappingRepository {
    pool: AnyPool,
}

impl SqlPathMappingRepository {
    /// Wraps an existing pool.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Opens a pool, retrying with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] once all attempts are exhausted.
    pub async fn connect(options: &StoreOptions) -> Result<Self, StoreError> {
        sqlx::any::install_default_drivers();

        let strategy = ExponentialBackoff::from_millis(2)
            .factor(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(options.connect_retries);

        let url = options.database_url.as_str();
        let pool = Retry::spawn(strategy, || {
            let pool_options = options.pool_options();
            async move {
                pool_options.connect(url).await.inspect_err(|e| {
                    tracing::warn!(error = %e, "Database connection attempt failed");
                })
            }
        })
        .await
        .map_err(StoreError::Connection)?;

        Ok(Self::new(pool))
    }

    /// Verifies connectivity and creates the table if it does not exist.
    ///
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the store does not answer and
    /// [`StoreError::Schema`] if the DDL fails.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        self.ping().await?;

        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Schema)?;

        tracing::debug!("url_table ready");
        Ok(())
    }

    /// Closes every pooled connection. Later calls fail with a store error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PathMappingRepository for SqlPathMappingRepository {
    async fn find_by_path(&self, path: &str) -> Result<Option<PathMapping>, StoreError> {
        let url = sqlx::query_scalar::<_, String>("SELECT url FROM url_table WHERE path = $1")
            .bind(path)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        Ok(url.map(|url| PathMapping::new(path, url)))
    }

    async fn create(&self, mapping: PathMapping) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO url_table (path, url) VALUES ($1, $2)")
            .bind(&mapping.path)
            .bind(&mapping.url)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from_insert(e, &mapping.path))?;

        Ok(())
    }

    async fn upsert(&self, mapping: PathMapping) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO url_table (path, url)
            VALUES ($1, $2)
            ON CONFLICT (path) DO UPDATE SET url = excluded.url
            "#,
        )
        .bind(&mapping.path)
        .bind(&mapping.url)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Write)?;

        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM url_table WHERE path = $1")
            .bind(path)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<PathMapping>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT path, url FROM url_table ORDER BY path",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(rows.into_iter().map(PathMapping::from).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_table")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::Query)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StoreError::Connection)?;

        Ok(())
    }
}
