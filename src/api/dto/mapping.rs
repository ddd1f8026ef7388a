//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Mapping;

/// Body of a creation request, form-encoded or JSON.
///
/// A missing `url` field deserializes to an empty string, which the
/// validator rejects like any other malformed input.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMappingRequest {
    #[serde(default)]
    pub url: String,
}

/// Successful creation response.
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MappingResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<Mapping> for MappingResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_id,
        }
    }
}
