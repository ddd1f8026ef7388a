//! Handler for the mapping creation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::mapping::MappingResponse;
use crate::api::extract::UrlSubmission;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a mapping for a URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form-encoded (`url=https%3A%2F%2Fwww.freecodecamp.org`) or JSON:
///
/// ```json
/// { "url": "https://www.freecodecamp.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Malformed URLs, unresolvable hosts and storage failures all answer
/// `{"error": "invalid url"}`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    UrlSubmission(payload): UrlSubmission,
) -> Result<Json<MappingResponse>, AppError> {
    let mapping = state.mapping_service.create_or_get(&payload.url).await?;

    Ok(Json(mapping.into()))
}
