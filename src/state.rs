//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::api::fallback::Fallback;
use crate::application::services::MappingService;
use crate::infrastructure::persistence::SqlPathMappingRepository;

/// Mapping service over the SQL store, as shared by the handlers.
pub type SharedMappingService = Arc<MappingService<SqlPathMappingRepository>>;

/// Application state cloned into every request.
///
/// Holds no mutable data of its own: the store's connection pool is the only
/// shared resource.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: SharedMappingService,
    pub fallback: Arc<dyn Fallback>,
}

impl AppState {
    pub fn new(mapping_service: SharedMappingService, fallback: Arc<dyn Fallback>) -> Self {
        Self {
            mapping_service,
            fallback,
        }
    }
}
