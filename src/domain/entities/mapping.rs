//! Mapping entity pairing an original URL with its short identifier.

use chrono::{DateTime, Utc};

/// A persisted URL mapping.
///
/// Created once per distinct `original_url` and never modified afterwards.
/// `short_id` values are positive and unique across all mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_id: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(1, "https://www.freecodecamp.org".to_string(), now);

        assert_eq!(mapping.short_id, 1);
        assert_eq!(mapping.original_url, "https://www.freecodecamp.org");
        assert_eq!(mapping.created_at, now);
    }
}
