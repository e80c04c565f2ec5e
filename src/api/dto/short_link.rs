//! DTOs for link creation.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{MAX_CODE_LENGTH, ShortLink};

/// Allowed characters and length for custom short codes. Empty is accepted
/// and means "generate one".
static SLASH_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9_-]{{0,{MAX_CODE_LENGTH}}}$")).unwrap()
});

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortLinkRequest {
    /// Optional custom short code; a random one is generated when absent or empty.
    #[serde(default)]
    #[validate(regex(path = "*SLASH_CODE_REGEX"))]
    pub slash_code: Option<String>,

    /// Destination URL; a missing scheme defaults to `https://`.
    #[serde(default)]
    pub destination: String,
}

impl CreateShortLinkRequest {
    /// Returns the custom code, treating an empty string as absent.
    pub fn custom_code(&self) -> Option<String> {
        self.slash_code.clone().filter(|code| !code.is_empty())
    }
}

/// A created short link as returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortLinkResponse {
    pub id: i64,
    pub slash_code: String,
    /// Full short URL, e.g. `https://s.example.com/aB3xYz`.
    pub origin: String,
    pub destination: String,
    pub visitors: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortLinkResponse {
    pub fn new(link: ShortLink, origin: String) -> Self {
        Self {
            id: link.id,
            slash_code: link.code,
            origin,
            destination: link.destination,
            visitors: link.visitors,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateShortLinkRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_slash_code_is_optional() {
        let req = request(json!({ "destination": "https://example.com" }));

        assert!(req.validate().is_ok());
        assert_eq!(req.custom_code(), None);
    }

    #[test]
    fn test_empty_slash_code_means_generated() {
        let req = request(json!({ "slash_code": "", "destination": "example.com" }));

        assert!(req.validate().is_ok());
        assert_eq!(req.custom_code(), None);
    }

    #[test]
    fn test_valid_slash_code() {
        let req = request(json!({ "slash_code": "promo_2024-A", "destination": "example.com" }));

        assert!(req.validate().is_ok());
        assert_eq!(req.custom_code().as_deref(), Some("promo_2024-A"));
    }

    #[test]
    fn test_slash_code_too_long() {
        let req = request(json!({ "slash_code": "abcdefghijklm", "destination": "example.com" }));

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_slash_code_at_max_length() {
        let code = "a".repeat(MAX_CODE_LENGTH);
        let req = request(json!({ "slash_code": code, "destination": "example.com" }));

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_slash_code_with_invalid_characters() {
        let req = request(json!({ "slash_code": "no/slash", "destination": "example.com" }));

        assert!(req.validate().is_err());
    }
}
