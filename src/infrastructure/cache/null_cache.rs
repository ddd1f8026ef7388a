//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is not configured or unreachable at startup. Every lookup
/// is a miss, so redirects always consult the mapping store.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _short_id: i64) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(&self, _short_id: i64, _original_url: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();

        cache.set_url(1, "https://example.com").await.unwrap();

        assert!(cache.get_url(1).await.unwrap().is_none());
        assert!(cache.health_check().await);
    }
}
