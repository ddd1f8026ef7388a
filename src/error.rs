//! Error types for the mapping store and the HTTP boundary.
//!
//! Internally every failure keeps its cause. At the boundary both operations
//! collapse to a single wire shape, `{"error": "invalid url"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::infrastructure::dns::HostResolutionError;
use crate::utils::db_error::is_unique_violation_on_original_url;

/// The only error message clients ever see.
pub const INVALID_URL: &str = "invalid url";

/// Failures reported by a [`crate::domain::repositories::MappingRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A mapping for the same `original_url` was stored concurrently.
    #[error("a mapping for this url already exists")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_original_url(&e) {
            Self::Conflict
        } else {
            Self::Database(e)
        }
    }
}

/// Why `create_or_get` refused a submission.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("url does not match the accepted pattern")]
    Malformed,

    #[error("host `{host}` is unreachable")]
    Unreachable {
        host: String,
        #[source]
        source: HostResolutionError,
    },

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Why `resolve` found nothing to redirect to.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no mapping for short url {0}")]
    NotFound(i64),

    #[error("`{0}` is not a valid short url identifier")]
    BadIdentifier(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// The two user-visible error kinds. Both serialize identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

/// Error returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Create(#[from] CreateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl AppError {
    /// Returns the user-visible kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Create(_) => ErrorKind::Validation,
            AppError::Resolve(_) => ErrorKind::NotFound,
        }
    }

    fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            AppError::Create(CreateError::Storage(_)) | AppError::Resolve(ResolveError::Storage(_))
        )
    }
}

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub fn invalid_url() -> Self {
        Self { error: INVALID_URL }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_storage_failure() {
            tracing::warn!(kind = ?self.kind(), "Request failed: {}", self);
        } else {
            tracing::debug!(kind = ?self.kind(), "Request rejected: {}", self);
        }

        (StatusCode::OK, Json(ErrorBody::invalid_url())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_by_operation() {
        assert_eq!(
            AppError::from(CreateError::Malformed).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            AppError::from(ResolveError::NotFound(3)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AppError::from(ResolveError::BadIdentifier("abc".to_string())).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_storage_errors_keep_operation_kind() {
        let create = AppError::from(CreateError::from(RepositoryError::Unavailable(
            "down".to_string(),
        )));
        assert_eq!(create.kind(), ErrorKind::Validation);
        assert!(create.is_storage_failure());

        let resolve = AppError::from(ResolveError::from(RepositoryError::Conflict));
        assert_eq!(resolve.kind(), ErrorKind::NotFound);
        assert!(resolve.is_storage_failure());
    }

    #[test]
    fn test_sqlx_error_without_constraint_is_database_error() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn test_every_error_has_the_same_status() {
        let responses = [
            AppError::from(CreateError::Malformed).into_response(),
            AppError::from(CreateError::Unreachable {
                host: "nowhere.invalid".to_string(),
                source: HostResolutionError::NoAddresses,
            })
            .into_response(),
            AppError::from(ResolveError::NotFound(999)).into_response(),
        ];

        for response in responses {
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorBody::invalid_url()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "invalid url" }));
    }
}
