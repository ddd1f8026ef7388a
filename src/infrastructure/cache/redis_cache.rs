//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for fast redirect lookups.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// All operations are fail-open: errors are logged and reported as misses.
pub struct RedisCache {
    client: ConnectionManager,
    ttl_seconds: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `ttl_seconds` - TTL applied to every cached entry (`CACHE_TTL_SECONDS`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            ttl_seconds,
            key_prefix: "short_url:".to_string(),
        })
    }

    fn build_key(&self, short_id: i64) -> String {
        format!("{}{}", self.key_prefix, short_id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_id: i64) -> CacheResult<Option<String>> {
        let key = self.build_key(short_id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Cache HIT: {} -> {}", short_id, url);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", short_id);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", short_id, e);
                Ok(None)
            }
        }
    }

    async fn set_url(&self, short_id: i64, original_url: &str) -> CacheResult<()> {
        let key = self.build_key(short_id);
        let mut conn = self.client.clone();

        match conn
            .set_ex::<_, _, ()>(&key, original_url, self.ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!(
                    "Cache SET: {} -> {} (TTL: {}s)",
                    short_id, original_url, self.ttl_seconds
                );
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", short_id, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
