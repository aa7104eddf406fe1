//! Domain layer containing the business entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Request orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
