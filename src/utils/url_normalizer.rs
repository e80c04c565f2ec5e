//! Destination URL normalization.
//!
//! Destinations typed without a scheme (`example.com/page`) are accepted and
//! assumed to be HTTPS. The stored value is the input with the scheme added,
//! not the re-serialized URL, so `https://example.com` stays without a
//! trailing slash.

use url::Url;

use crate::domain::entities::MAX_DESTINATION_LENGTH;

/// Errors that can occur during destination normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("destination is required")]
    Missing,

    #[error("destination invalid")]
    Invalid,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("destination must be at most {MAX_DESTINATION_LENGTH} characters")]
    TooLong,

    #[error("destination must not contain control characters")]
    ControlCharacters,
}

/// Normalizes a user-supplied destination.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed; an empty value is rejected
/// 2. Control characters are rejected; the URL parser would strip them, but
///    the stored value would keep them and could not be sent as `Location`
/// 3. A value with neither `.` nor `:` cannot be a host and is rejected
/// 4. A value without `://` gets `https://` prepended
/// 5. The result must parse as an HTTP or HTTPS URL with a host
/// 6. The result must fit in [`MAX_DESTINATION_LENGTH`] characters
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_destination("example.com").unwrap(), "https://example.com");
/// assert!(normalize_destination("javascript:alert(1)").is_err());
/// ```
pub fn normalize_destination(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Missing);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(UrlNormalizationError::ControlCharacters);
    }

    if !trimmed.contains('.') && !trimmed.contains(':') {
        return Err(UrlNormalizationError::Invalid);
    }

    let destination = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url =
        Url::parse(&destination).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::Invalid);
    }

    if destination.chars().count() > MAX_DESTINATION_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_full_https_url() {
        let result = normalize_destination("https://example.com");
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[test]
    fn test_keeps_http_url() {
        let result = normalize_destination("http://example.com/path?q=1");
        assert_eq!(result.unwrap(), "http://example.com/path?q=1");
    }

    #[test]
    fn test_adds_https_scheme() {
        let result = normalize_destination("example.com/page");
        assert_eq!(result.unwrap(), "https://example.com/page");
    }

    #[test]
    fn test_adds_scheme_to_host_with_port() {
        let result = normalize_destination("localhost:8080");
        assert_eq!(result.unwrap(), "https://localhost:8080");
    }

    #[test]
    fn test_trims_whitespace() {
        let result = normalize_destination("  https://example.com  ");
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(normalize_destination("   "), Err(UrlNormalizationError::Missing));
    }

    #[test]
    fn test_rejects_value_without_host_markers() {
        assert_eq!(
            normalize_destination("notaurl"),
            Err(UrlNormalizationError::Invalid)
        );
    }

    #[test]
    fn test_rejects_unsupported_protocol() {
        assert_eq!(
            normalize_destination("ftp://example.com/file"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let result = normalize_destination("https://exa mple.com");
        assert!(matches!(result, Err(UrlNormalizationError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_embedded_newline() {
        assert_eq!(
            normalize_destination("https://example.com/a\nb"),
            Err(UrlNormalizationError::ControlCharacters)
        );
    }

    #[test]
    fn test_rejects_embedded_tab_and_nul() {
        assert_eq!(
            normalize_destination("example.com/a\tb"),
            Err(UrlNormalizationError::ControlCharacters)
        );
        assert_eq!(
            normalize_destination("https://example.com/\0"),
            Err(UrlNormalizationError::ControlCharacters)
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_DESTINATION_LENGTH));
        assert_eq!(normalize_destination(&long), Err(UrlNormalizationError::TooLong));
    }

    #[test]
    fn test_accepts_max_length() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_DESTINATION_LENGTH - prefix.len()));
        assert!(normalize_destination(&url).is_ok());
    }
}
