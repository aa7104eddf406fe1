//! SQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries over the `Any` driver (PostgreSQL or SQLite, chosen by URL).
//!
//! # Repositories
//!
//! - [`SqlPathMappingRepository`] - Path mapping storage and retrieval

pub mod sql_path_mapping_repository;

pub use sql_path_mapping_repository::{SqlPathMappingRepository, StoreOptions};
