//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`PathMappingRepository`] - Path mapping lookup and CRUD operations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_path_mapping.rs` for usage examples.

pub mod path_mapping_repository;

pub use path_mapping_repository::PathMappingRepository;

#[cfg(test)]
pub use path_mapping_repository::MockPathMappingRepository;
