//! Error types for the store and the HTTP layer.
//!
//! [`StoreError`] is what the persistence layer reports. [`AppError`] is what
//! a handler returns; it renders as a `{"errors": "..."}` JSON envelope.
//! Handlers decide how a store failure maps onto an HTTP status, because the
//! same [`StoreError`] means different things on a lookup and on a write.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::api::response::json_response;

/// Failures reported by a path mapping store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unreachable: {0}")]
    Connection(#[source] sqlx::Error),

    /// Bootstrapping the table failed.
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    /// `create` hit the uniqueness constraint on `path`.
    #[error("path '{path}' already exists")]
    DuplicateKey { path: String },

    /// A read query failed (connection loss, malformed driver response).
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// The store rejected a mutation.
    #[error("write failed: {0}")]
    Write(#[source] sqlx::Error),
}

impl StoreError {
    /// Classifies a failed insert, separating unique violations from other
    /// write errors.
    pub fn from_insert(e: sqlx::Error, path: &str) -> Self {
        let unique_violation = e
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());

        if unique_violation {
            Self::DuplicateKey {
                path: path.to_string(),
            }
        } else {
            Self::Write(e)
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

/// JSON error envelope shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: String,
}

/// Request-scoped failure returned by HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be decoded or failed validation (422).
    Decode { message: String },
    /// The store rejected a mutation (400).
    Write { message: String },
    /// A lookup failed; only this request fails (500).
    Internal { message: String },
}

impl AppError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Write { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Decode { message }
            | AppError::Write { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        AppError::decode(format!("Invalid fields: {fields}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            errors: match self {
                AppError::Decode { message }
                | AppError::Write { message }
                | AppError::Internal { message } => message,
            },
        };

        json_response(status, &body)
    }
}
