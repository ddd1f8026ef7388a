//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache for resolved mappings.
///
/// Mappings never change once created, so entries only expire by TTL and are
/// never invalidated. Cache failures must degrade to a store lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached original URL for `short_id`.
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_url(&self, short_id: i64) -> CacheResult<Option<String>>;

    /// Caches the original URL for `short_id` using the configured TTL.
    async fn set_url(&self, short_id: i64, original_url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
