//! Submission gate: syntactic pattern check plus host reachability.

use std::sync::Arc;

use crate::error::CreateError;
use crate::infrastructure::dns::{HostResolutionError, HostResolver};
use crate::utils::url_pattern;

/// Decides whether a submitted string may become a mapping.
///
/// The syntactic check is pure; the reachability check goes to the network
/// through a [`HostResolver`]. [`UrlValidator::check`] runs both and reports a
/// single [`CreateError`].
pub struct UrlValidator<R: ?Sized = dyn HostResolver> {
    resolver: Arc<R>,
}

impl<R: HostResolver + ?Sized> UrlValidator<R> {
    /// Creates a validator that checks reachability with `resolver`.
    pub fn new(resolver: Arc<R>) -> Self {
        Self { resolver }
    }

    /// Returns true if `input` matches the accepted URL pattern.
    ///
    /// See [`url_pattern::accepts`].
    pub fn accepts(&self, input: &str) -> bool {
        url_pattern::accepts(input)
    }

    /// Returns the host portion of `input`.
    ///
    /// See [`url_pattern::extract_host`].
    pub fn extract_host<'a>(&self, input: &'a str) -> &'a str {
        url_pattern::extract_host(input)
    }

    /// Confirms that `host` resolves.
    ///
    /// # Errors
    ///
    /// Returns the resolver's [`HostResolutionError`] on any failure,
    /// including timeout.
    pub async fn resolve_host(&self, host: &str) -> Result<(), HostResolutionError> {
        self.resolver.resolve(host).await
    }

    /// Runs the pattern check, then the reachability check.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::Malformed`] if the pattern does not match; the
    /// resolver is not consulted in that case.
    /// Returns [`CreateError::Unreachable`] if the host does not resolve.
    pub async fn check(&self, input: &str) -> Result<(), CreateError> {
        if !self.accepts(input) {
            return Err(CreateError::Malformed);
        }

        let host = self.extract_host(input);
        self.resolve_host(host)
            .await
            .map_err(|source| CreateError::Unreachable {
                host: host.to_string(),
                source,
            })
    }
}
