//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::cache::CacheService;

/// State shared by all request handlers.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(mapping_service: Arc<MappingService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            mapping_service,
            cache,
        }
    }
}
