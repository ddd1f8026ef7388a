//! HTTP server initialization and runtime setup.
//!
//! Builds the mapping store, resolver and cache from configuration, then runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::MappingService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::dns::{HostResolver, NoopResolver, SystemResolver};
use crate::infrastructure::persistence::{MemoryMappingRepository, PgMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL pool + migrations, or in-memory)
/// - Host resolver (system DNS, or no-op when the check is disabled)
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let resolver = build_resolver(&config);
    let cache = build_cache(&config).await;

    let mapping_service = Arc::new(MappingService::new(repository, resolver));
    let state = AppState::new(mapping_service, cache);

    let app = app_router(state, &config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects a PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres backend")?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies pending migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")
}

async fn build_repository(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            migrate(&pool).await?;

            Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; mappings will not survive a restart");
            Ok(Arc::new(MemoryMappingRepository::new()))
        }
    }
}

fn build_resolver(config: &Config) -> Arc<dyn HostResolver> {
    if config.reachability_check {
        Arc::new(SystemResolver::new(config.dns_timeout()))
    } else {
        tracing::info!("Reachability check disabled");
        Arc::new(NoopResolver::new())
    }
}

async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
