//! Short link entity representing a code to destination mapping.

use chrono::{DateTime, Utc};

/// Maximum length of a short code accepted by the store.
pub const MAX_CODE_LENGTH: usize = 12;

/// Maximum length of a destination URL accepted by the store.
pub const MAX_DESTINATION_LENGTH: usize = 512;

/// A short link with its visit counter.
///
/// `visitors` is only ever increased, and only by the visitor queue flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub destination: String,
    pub visitors: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        destination: String,
        visitors: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            destination,
            visitors,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub destination: String,
}

/// A creation request as it reaches the service.
///
/// The destination is expected to be validated and normalized by the caller.
#[derive(Debug, Clone)]
pub struct CreateShortLink {
    pub code: Option<String>,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            7,
            "aB3xYz".to_string(),
            "https://example.com".to_string(),
            0,
            now,
            now,
        );

        assert_eq!(link.id, 7);
        assert_eq!(link.code, "aB3xYz");
        assert_eq!(link.destination, "https://example.com");
        assert_eq!(link.visitors, 0);
        assert_eq!(link.created_at, link.updated_at);
    }

    #[test]
    fn test_new_short_link_creation() {
        let new_link = NewShortLink {
            code: "promo1".to_string(),
            destination: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.code, "promo1");
        assert_eq!(new_link.destination, "https://rust-lang.org");
    }
}
