#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use short_url::api::handlers::{health_handler, redirect_handler, shorten_handler};
use short_url::application::services::MappingService;
use short_url::domain::entities::Mapping;
use short_url::domain::repositories::MappingRepository;
use short_url::error::RepositoryError;
use short_url::infrastructure::cache::{CacheResult, CacheService, NullCache};
use short_url::infrastructure::dns::{HostResolutionError, HostResolver};
use short_url::infrastructure::persistence::MemoryMappingRepository;
use short_url::state::AppState;

/// Resolves every host except those under the reserved `.invalid` TLD.
pub struct TestResolver;

#[async_trait]
impl HostResolver for TestResolver {
    async fn resolve(&self, host: &str) -> Result<(), HostResolutionError> {
        if host.is_empty() {
            Err(HostResolutionError::EmptyHost)
        } else if host.ends_with(".invalid") {
            Err(HostResolutionError::NoAddresses)
        } else {
            Ok(())
        }
    }
}

/// Repository whose every call fails.
pub struct FailingRepository;

#[async_trait]
impl MappingRepository for FailingRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<Mapping>, RepositoryError> {
        Err(RepositoryError::Unavailable("test outage".to_string()))
    }

    async fn find_by_short_id(&self, _: i64) -> Result<Option<Mapping>, RepositoryError> {
        Err(RepositoryError::Unavailable("test outage".to_string()))
    }

    async fn insert_next(&self, _: &str) -> Result<Mapping, RepositoryError> {
        Err(RepositoryError::Unavailable("test outage".to_string()))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Err(RepositoryError::Unavailable("test outage".to_string()))
    }
}

/// Cache backed by a map, optionally reporting itself unhealthy.
#[derive(Default)]
pub struct MapCache {
    pub entries: Mutex<HashMap<i64, String>>,
    pub unhealthy: bool,
}

impl MapCache {
    pub fn with_entry(short_id: i64, url: &str) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(short_id, url.to_string());
        cache
    }

    pub fn get(&self, short_id: i64) -> Option<String> {
        self.entries.lock().unwrap().get(&short_id).cloned()
    }
}

#[async_trait]
impl CacheService for MapCache {
    async fn get_url(&self, short_id: i64) -> CacheResult<Option<String>> {
        Ok(self.get(short_id))
    }

    async fn set_url(&self, short_id: i64, original_url: &str) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(short_id, original_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }
}

pub fn create_state(
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let resolver: Arc<dyn HostResolver> = Arc::new(TestResolver);
    let mapping_service = Arc::new(MappingService::new(repository, resolver));

    AppState::new(mapping_service, cache)
}

pub fn create_test_state() -> (AppState, Arc<MemoryMappingRepository>) {
    let repository = Arc::new(MemoryMappingRepository::new());
    let state = create_state(repository.clone(), Arc::new(NullCache::new()));

    (state, repository)
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(api_router(state)).unwrap()
}

pub async fn seed_mapping(repository: &MemoryMappingRepository, url: &str) -> i64 {
    repository.insert_next(url).await.unwrap().short_id
}
