//! Core domain entities.
//!
//! The service has a single flat entity, [`PathMapping`]: one short path key
//! and the destination URL it redirects to. There are no relationships to
//! other records.

pub mod path_mapping;

pub use path_mapping::PathMapping;
