//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::{debug, error, warn};

use crate::application::services::mapping_service::parse_short_id;
use crate::error::{AppError, ResolveError};
use crate::state::AppState;

/// Bytes escaped in a `Location` value. Non-ASCII is always escaped; an
/// existing `%` is left alone so already-encoded URLs pass through unchanged.
const LOCATION_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Request Flow
///
/// 1. Parse the path segment as a positive integer (a segment that does not
///    decode to UTF-8 is rejected like any other bad identifier)
/// 2. Check cache for the URL (key: `short_url:{id}`)
/// 3. On cache miss, query the mapping store
/// 4. Asynchronously fill the cache
/// 5. Return 302 Found
///
/// # Errors
///
/// Unknown or unparseable identifiers answer `{"error": "invalid url"}`.
pub async fn redirect_handler(
    raw_id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(raw_id) = raw_id.map_err(|rejection| {
        debug!("Unreadable short url segment: {}", rejection.body_text());
        ResolveError::BadIdentifier(rejection.body_text())
    })?;
    let short_id = parse_short_id(&raw_id)?;

    let original_url = match state.cache.get_url(short_id).await {
        Ok(Some(cached_url)) => {
            debug!("Cache HIT for {}", short_id);
            cached_url
        }
        Ok(None) => {
            debug!("Cache MISS for {}", short_id);

            let mapping = state.mapping_service.resolve(short_id).await?;

            let cache = state.cache.clone();
            let url = mapping.original_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(short_id, &url).await {
                    error!("Failed to cache URL: {}", e);
                }
            });

            mapping.original_url
        }
        Err(e) => {
            error!("Cache error: {}", e);
            state.mapping_service.resolve(short_id).await?.original_url
        }
    };

    found(short_id, &original_url)
}

/// Builds a `302 Found` response pointing at `location`.
///
/// Stored URLs are only checked up to their host, so the remainder may hold
/// spaces, control characters or non-ASCII text. Those are percent-encoded.
fn found(short_id: i64, location: &str) -> Result<Response, AppError> {
    let encoded = utf8_percent_encode(location, LOCATION_ESCAPES).to_string();
    let value = HeaderValue::try_from(encoded).map_err(|_| {
        warn!("Mapping {} is not a valid Location header", short_id);
        ResolveError::NotFound(short_id)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, value)]).into_response())
}
