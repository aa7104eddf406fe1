//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point per operation.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Path mapping lookup and CRUD
//!   operations

pub mod services;
