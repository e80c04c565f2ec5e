//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable store for short links.
///
/// This is the authoritative source for code to destination mappings and
/// visit counters. Uniqueness of codes is enforced here, not by callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyExists`] if the code is already taken.
    ///
    /// Returns [`AppError::Unexpected`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unexpected`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically adds `visitors` to the visit counter of `code`.
    ///
    /// Concurrent increments of the same code must not lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Unexpected`] on database errors.
    async fn increment_visitors(&self, code: &str, visitors: u64) -> Result<(), AppError>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}
