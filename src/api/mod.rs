//! HTTP layer: request/response handling for redirects and mapping management.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Request extractors
//! - [`fallback`] - Responders for unmatched paths
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and timeout middleware
//! - [`response`] - JSON response encoding
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
