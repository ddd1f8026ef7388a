//! DNS resolver backed by the operating system.

use super::resolver::{HostResolutionError, HostResolver};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::debug;

/// Resolves hosts with the system resolver, bounded by a timeout.
///
/// The lookup runs on Tokio's blocking pool, so a slow resolver never stalls
/// other requests. A timed-out lookup is abandoned, not cancelled.
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Creates a resolver that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<(), HostResolutionError> {
        if host.is_empty() {
            return Err(HostResolutionError::EmptyHost);
        }

        let mut addrs = timeout(self.timeout, lookup_host((host, 0)))
            .await
            .map_err(|_| HostResolutionError::Timeout(self.timeout))?
            .map_err(HostResolutionError::Lookup)?;

        match addrs.next() {
            Some(addr) => {
                debug!("Resolved {} -> {}", host, addr.ip());
                Ok(())
            }
            None => Err(HostResolutionError::NoAddresses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_ip_literal() {
        let resolver = SystemResolver::new(Duration::from_secs(1));
        assert!(resolver.resolve("127.0.0.1").await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_empty_host() {
        let resolver = SystemResolver::new(Duration::from_secs(1));
        assert!(matches!(
            resolver.resolve("").await,
            Err(HostResolutionError::EmptyHost)
        ));
    }

    #[tokio::test]
    async fn test_rejects_host_with_port() {
        let resolver = SystemResolver::new(Duration::from_secs(5));
        assert!(resolver.resolve("127.0.0.1:8080").await.is_err());
    }
}
