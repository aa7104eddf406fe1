//! Utility functions shared by the HTTP layer and the admin CLI.
//!
//! - [`path_key`] - Path key normalization and validation

pub mod path_key;
