//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`visitor_queue`] - Coalescing visit counter flushed in the background
//!
//! # Visit Counting Flow
//!
//! 1. [`crate::application::services::ShortLinkService::resolve`] serves a redirect
//! 2. One visit is recorded with [`visitor_queue::VisitorQueue::enqueue`]
//! 3. A single drain task merges visits per code and flushes them through
//!    [`repositories::ShortLinkRepository::increment_visitors`]

pub mod entities;
pub mod repositories;
pub mod visitor_queue;
