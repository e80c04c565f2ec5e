//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortLinkService;
use crate::infrastructure::cache::CacheService;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub short_link_service: Arc<ShortLinkService>,
    pub cache: Arc<dyn CacheService>,
    /// Public origin short URLs are built from, without a trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Creates the application state.
    pub fn new(
        short_link_service: Arc<ShortLinkService>,
        cache: Arc<dyn CacheService>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            short_link_service,
            cache,
            base_url: base_url.into(),
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
