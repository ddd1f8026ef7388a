//! In-process implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::RepositoryError;

#[derive(Default)]
struct Inner {
    /// Indexed by `short_id - 1`.
    mappings: Vec<Mapping>,
    by_original_url: HashMap<String, i64>,
}

/// Mapping repository held in process memory.
///
/// Selected with `STORAGE_BACKEND=memory`. Contents are lost on restart.
/// The write lock covers both the count and the insert, so identifiers are
/// dense and never collide.
#[derive(Default)]
pub struct MemoryMappingRepository {
    inner: RwLock<Inner>,
}

impl MemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, RepositoryError> {
        let inner = self.inner.read().await;

        Ok(inner
            .by_original_url
            .get(original_url)
            .and_then(|&id| inner.mappings.get((id - 1) as usize))
            .cloned())
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Mapping>, RepositoryError> {
        if short_id < 1 {
            return Ok(None);
        }

        let inner = self.inner.read().await;
        Ok(inner.mappings.get((short_id - 1) as usize).cloned())
    }

    async fn insert_next(&self, original_url: &str) -> Result<Mapping, RepositoryError> {
        let mut inner = self.inner.write().await;

        if inner.by_original_url.contains_key(original_url) {
            return Err(RepositoryError::Conflict);
        }

        let short_id = inner.mappings.len() as i64 + 1;
        let mapping = Mapping::new(short_id, original_url.to_string(), Utc::now());

        inner.mappings.push(mapping.clone());
        inner
            .by_original_url
            .insert(original_url.to_string(), short_id);

        Ok(mapping)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.inner.read().await.mappings.len() as i64)
    }
}
