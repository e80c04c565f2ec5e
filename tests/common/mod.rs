#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use slashlink::application::services::ShortLinkService;
use slashlink::domain::entities::{NewShortLink, ShortLink};
use slashlink::domain::repositories::ShortLinkRepository;
use slashlink::domain::visitor_queue::VisitorQueue;
use slashlink::error::AppError;
use slashlink::infrastructure::cache::NullCache;
use slashlink::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "https://s.example.com";

/// Store backed by a map, shared between the service and assertions.
#[derive(Default)]
pub struct InMemoryShortLinkRepository {
    links: Mutex<HashMap<String, ShortLink>>,
    next_id: Mutex<i64>,
    healthy: Mutex<bool>,
}

impl InMemoryShortLinkRepository {
    pub fn new() -> Self {
        Self {
            healthy: Mutex::new(true),
            ..Default::default()
        }
    }

    pub fn visitors(&self, code: &str) -> Option<i64> {
        self.links.lock().unwrap().get(code).map(|l| l.visitors)
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn set_healthy(&self, healthy: bool) {
        *self.healthy.lock().unwrap() = healthy;
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.lock().unwrap();
        if links.contains_key(&new_link.code) {
            return Err(AppError::already_exists(
                "Short code already taken",
                json!({ "code": new_link.code }),
            ));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let now = Utc::now();
        let link = ShortLink::new(
            *next_id,
            new_link.code.clone(),
            new_link.destination,
            0,
            now,
            now,
        );
        links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn increment_visitors(&self, code: &str, visitors: u64) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();
        match links.get_mut(code) {
            Some(link) => {
                link.visitors += visitors as i64;
                link.updated_at = Utc::now();
                Ok(())
            }
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    async fn health_check(&self) -> bool {
        *self.healthy.lock().unwrap()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let cache = Arc::new(NullCache::new());

    let visitor_queue = VisitorQueue::new(repository.clone());
    let service = Arc::new(ShortLinkService::new(
        repository.clone(),
        cache.clone(),
        visitor_queue,
        60,
    ));

    (AppState::new(service, cache, TEST_BASE_URL), repository)
}

pub async fn seed_link(repository: &InMemoryShortLinkRepository, code: &str, destination: &str) {
    repository
        .create(NewShortLink {
            code: code.to_string(),
            destination: destination.to_string(),
        })
        .await
        .unwrap();
}
