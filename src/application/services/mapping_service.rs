//! Mapping creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info};

use super::url_validator::UrlValidator;
use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::{CreateError, RepositoryError, ResolveError};
use crate::infrastructure::dns::HostResolver;

/// Service owning the create-or-reuse and lookup operations on mappings.
///
/// Every creation passes the [`UrlValidator`] first. Deduplication is by exact
/// string equality of `original_url`.
pub struct MappingService<M: ?Sized = dyn MappingRepository, R: ?Sized = dyn HostResolver> {
    repository: Arc<M>,
    validator: UrlValidator<R>,
}

impl<M, R> MappingService<M, R>
where
    M: MappingRepository + ?Sized,
    R: HostResolver + ?Sized,
{
    /// Creates a new mapping service.
    pub fn new(repository: Arc<M>, resolver: Arc<R>) -> Self {
        Self {
            repository,
            validator: UrlValidator::new(resolver),
        }
    }

    /// Returns the mapping for `original_url`, creating it if needed.
    ///
    /// # Flow
    ///
    /// 1. Pattern check, then reachability check of the host
    /// 2. Exact-match lookup; an existing mapping is returned unchanged
    /// 3. Otherwise a new mapping is stored with `short_id = count + 1`
    ///
    /// If another request stores the same URL between steps 2 and 3, the
    /// repository reports a conflict and the winner's mapping is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::Malformed`] or [`CreateError::Unreachable`] if
    /// validation fails, and [`CreateError::Storage`] on repository errors.
    pub async fn create_or_get(&self, original_url: &str) -> Result<Mapping, CreateError> {
        self.validator.check(original_url).await?;

        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            debug!(
                "Reusing mapping {} for {}",
                existing.short_id, existing.original_url
            );
            return Ok(existing);
        }

        match self.repository.insert_next(original_url).await {
            Ok(mapping) => {
                info!(
                    "Created mapping {} for {}",
                    mapping.short_id, mapping.original_url
                );
                Ok(mapping)
            }
            Err(RepositoryError::Conflict) => {
                debug!("Concurrent creation for {}, re-reading", original_url);
                self.repository
                    .find_by_original_url(original_url)
                    .await?
                    .ok_or(CreateError::Storage(RepositoryError::Conflict))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up the mapping with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if no mapping has this identifier.
    /// Returns [`ResolveError::Storage`] on repository errors.
    pub async fn resolve(&self, short_id: i64) -> Result<Mapping, ResolveError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or(ResolveError::NotFound(short_id))
    }

    /// Parses a raw identifier from a request path and resolves it.
    ///
    /// Parsing is strict: whitespace, fractions and trailing characters are
    /// rejected rather than truncated.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::BadIdentifier`] if `raw` is not a positive
    /// integer, otherwise the errors of [`Self::resolve`].
    pub async fn resolve_identifier(&self, raw: &str) -> Result<Mapping, ResolveError> {
        let short_id = parse_short_id(raw)?;
        self.resolve(short_id).await
    }

    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] on repository errors.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        self.repository.count().await
    }
}

/// Parses a path segment into a positive short identifier.
///
/// # Errors
///
/// Returns [`ResolveError::BadIdentifier`] for anything but a positive `i64`.
pub fn parse_short_id(raw: &str) -> Result<i64, ResolveError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ResolveError::BadIdentifier(raw.to_string())),
    }
}
