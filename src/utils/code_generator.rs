//! Short code generation with collision checks.
//!
//! Codes are drawn uniformly from `[a-zA-Z0-9]`. The generator is not meant
//! to be unguessable, only unlikely to collide.

use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::MAX_CODE_LENGTH;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Maximum number of candidates checked before giving up.
///
/// Repeated collisions mean the code space is too crowded, so this is kept
/// small and never retried further.
pub const MAX_ATTEMPTS: usize = 3;

/// Draws a random alphanumeric code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = random_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates a code that is not yet present in the store.
///
/// Performs one point lookup per attempt and no writes.
///
/// # Errors
///
/// Returns [`AppError::GenerationExhausted`] if all [`MAX_ATTEMPTS`]
/// candidates were taken.
/// Returns [`AppError::Unexpected`] if a lookup fails.
pub async fn generate_unique_code(repository: &dyn ShortLinkRepository) -> Result<String, AppError> {
    for attempt in 1..=MAX_ATTEMPTS {
        let code = random_code(CODE_LENGTH);

        if repository.find_by_code(&code).await?.is_none() {
            return Ok(code);
        }

        debug!(code = %code, attempt, "Generated code already taken");
    }

    warn!(attempts = MAX_ATTEMPTS, "Could not find a free short code");
    Err(AppError::GenerationExhausted)
}

/// Returns `true` if `code` can be used as a custom short code: 1 to
/// [`MAX_CODE_LENGTH`] characters from `[A-Za-z0-9_-]`.
pub fn is_valid_custom_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Returns an [`AppError::Validation`] for a malformed custom code.
pub(crate) fn invalid_code(code: &str) -> AppError {
    AppError::bad_request(
        format!("slash_code must be 1 to {MAX_CODE_LENGTH} characters of [A-Za-z0-9_-]"),
        json!({ "field": "slash_code", "code": code }),
    )
}

/// Returns an [`AppError::AlreadyExists`] for a taken custom code.
pub(crate) fn code_taken(code: &str) -> AppError {
    AppError::already_exists("Short code already exists", json!({ "code": code }))
}
