//! Resolver used when the reachability check is disabled.

use super::resolver::{HostResolutionError, HostResolver};
use async_trait::async_trait;
use tracing::debug;

/// A resolver that accepts every host without touching the network.
///
/// Selected with `REACHABILITY_CHECK=false`.
pub struct NoopResolver;

impl NoopResolver {
    /// Creates a new NoopResolver instance.
    pub fn new() -> Self {
        debug!("Using NoopResolver (reachability check disabled)");
        Self
    }
}

impl Default for NoopResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for NoopResolver {
    async fn resolve(&self, _host: &str) -> Result<(), HostResolutionError> {
        Ok(())
    }
}
