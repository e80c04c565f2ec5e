//! Short link creation and redirect resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::{CreateShortLink, NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::domain::visitor_queue::VisitorQueue;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::{
    code_taken, generate_unique_code, invalid_code, is_valid_custom_code,
};

/// Default lifetime of a cached destination: 3 hours.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3 * 60 * 60;

/// Service for creating short links and resolving redirects.
///
/// Redirect latency is bounded by a single cache or store read: populating
/// the cache and counting the visit are both done off the response path.
pub struct ShortLinkService {
    repository: Arc<dyn ShortLinkRepository>,
    cache: Arc<dyn CacheService>,
    visitor_queue: VisitorQueue,
    cache_ttl_seconds: u64,
}

impl ShortLinkService {
    /// Creates a new service.
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        cache: Arc<dyn CacheService>,
        visitor_queue: VisitorQueue,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            repository,
            cache,
            visitor_queue,
            cache_ttl_seconds,
        }
    }

    /// Returns the visitor queue fed by [`Self::resolve`].
    pub fn visitor_queue(&self) -> &VisitorQueue {
        &self.visitor_queue
    }

    /// Creates a short link.
    ///
    /// With a custom code, the code's format is validated and its
    /// availability checked first; a malformed or taken code is reported
    /// without writing anything. Without one, a random code is
    /// generated (see [`generate_unique_code`]).
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the custom code is malformed
    /// - [`AppError::AlreadyExists`] if the custom code is taken, including
    ///   when another request claims it between the check and the insert
    /// - [`AppError::GenerationExhausted`] if no free random code was found
    /// - [`AppError::Unexpected`] on store failures
    pub async fn create_short_link(&self, request: CreateShortLink) -> Result<ShortLink, AppError> {
        let code = match request.code {
            Some(custom) => {
                if !is_valid_custom_code(&custom) {
                    return Err(invalid_code(&custom));
                }
                if self.repository.find_by_code(&custom).await?.is_some() {
                    return Err(code_taken(&custom));
                }
                custom
            }
            None => generate_unique_code(self.repository.as_ref()).await?,
        };

        let link = self
            .repository
            .create(NewShortLink {
                code,
                destination: request.destination,
            })
            .await?;

        debug!(code = %link.code, "Short link created");
        Ok(link)
    }

    /// Retrieves a link by its short code, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Unexpected`] on store failures.
    pub async fn get_link_by_code(&self, code: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Resolves a short code to its destination.
    ///
    /// # Flow
    ///
    /// 1. Look the code up in the cache; a hit is returned immediately
    /// 2. On a miss (or a cache error) read the store
    /// 3. On a store hit, populate the cache in a detached task
    /// 4. Every successful resolution records one visit in the visitor queue
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Unexpected`] on store failures; the cause is logged.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.cache.get_url(code).await {
            Ok(Some(destination)) => {
                metrics::counter!("cache_hits_total").increment(1);
                self.visitor_queue.enqueue(code);
                return Ok(destination);
            }
            Ok(None) => {
                metrics::counter!("cache_misses_total").increment(1);
                debug!(code = %code, "Cache MISS");
            }
            Err(e) => {
                metrics::counter!("cache_misses_total").increment(1);
                warn!(code = %code, error = %e, "Cache lookup failed, falling back to store");
            }
        }

        let link = match self.repository.find_by_code(code).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                debug!(code = %code, "Short link not found");
                return Err(not_found(code));
            }
            Err(e) => {
                error!(code = %code, error = %e, "Failed to resolve short link");
                return Err(AppError::Unexpected);
            }
        };

        self.spawn_cache_fill(code, &link.destination);
        self.visitor_queue.enqueue(code);

        Ok(link.destination)
    }

    /// Checks if the durable store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    /// Writes `code -> destination` to the cache without waiting for it.
    fn spawn_cache_fill(&self, code: &str, destination: &str) {
        let cache = self.cache.clone();
        let code = code.to_string();
        let destination = destination.to_string();
        let ttl = self.cache_ttl_seconds;

        tokio::spawn(async move {
            if let Err(e) = cache.set_url(&code, &destination, Some(ttl)).await {
                warn!(code = %code, error = %e, "Failed to cache destination");
            }
        });
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
