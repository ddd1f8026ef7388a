//! Repository trait for URL mapping data access.

use crate::domain::entities::Mapping;
use crate::error::RepositoryError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Mappings are insert-only: there is no update or delete.
///
/// # Examples
///
/// See integration tests: `tests/repository_memory.rs`, `tests/repository_postgres.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping whose `original_url` equals `original_url` exactly.
    ///
    /// No normalization: case, trailing slashes and query strings all matter.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, RepositoryError>;

    /// Finds the mapping with the given short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Mapping>, RepositoryError>;

    /// Stores a new mapping with `short_id = count + 1`.
    ///
    /// Counting and inserting happen atomically, so concurrent callers never
    /// receive the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if a mapping for `original_url`
    /// already exists.
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn insert_next(&self, original_url: &str) -> Result<Mapping, RepositoryError>;

    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn count(&self) -> Result<i64, RepositoryError>;
}
