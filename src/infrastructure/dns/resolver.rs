//! Host resolver trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Reasons a host could not be confirmed reachable.
///
/// Callers treat every variant the same way; the distinction exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum HostResolutionError {
    #[error("empty host")]
    EmptyHost,

    #[error("lookup failed: {0}")]
    Lookup(#[source] std::io::Error),

    #[error("lookup returned no addresses")]
    NoAddresses,

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Confirms that a host name resolves on the network.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - `getaddrinfo` via Tokio
/// - [`crate::infrastructure::dns::NoopResolver`] - always succeeds
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, succeeding if at least one address is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`HostResolutionError`] if the host is empty, the lookup
    /// fails, yields nothing, or does not finish in time.
    async fn resolve(&self, host: &str) -> Result<(), HostResolutionError>;
}
