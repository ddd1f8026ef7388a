//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::RepositoryError;

/// Row shape shared by every query on `url_mappings`.
#[derive(Debug, sqlx::FromRow)]
struct MappingRow {
    short_url: i64,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.short_url, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Uniqueness of `original_url` is enforced by a unique index on
/// `md5(original_url)`, so URLs of any length can be stored.
///
/// Identifier allocation holds a `SHARE ROW EXCLUSIVE` table lock for the
/// duration of the insert transaction. The mode conflicts with itself and with
/// plain inserts, so `COUNT(*) + 1` is computed and stored without interleaving.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, RepositoryError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_url, original_url, created_at
            FROM url_mappings
            WHERE md5(original_url) = md5($1) AND original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Mapping>, RepositoryError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_url, original_url, created_at
            FROM url_mappings
            WHERE short_url = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn insert_next(&self, original_url: &str) -> Result<Mapping, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("LOCK TABLE url_mappings IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, short_url)
            SELECT $1, COUNT(*) + 1 FROM url_mappings
            RETURNING short_url, original_url, created_at
            "#,
        )
        .bind(original_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
