//! Helpers for classifying database errors.

/// Name of the unique index on `md5(url_mappings.original_url)`.
///
/// Postgres reports the index name as the constraint of a unique violation.
pub const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";

/// Returns true if `e` is a unique violation on the `original_url` column.
///
/// Raised when two requests race to create a mapping for the same URL.
pub fn is_unique_violation_on_original_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ORIGINAL_URL_CONSTRAINT))
}
