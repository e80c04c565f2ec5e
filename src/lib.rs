//! # slashlink
//!
//! A short link service that resolves short codes to destination URLs and
//! counts visits without putting a write on the redirect path.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the repository trait, and the
//!   coalescing [`domain::visitor_queue::VisitorQueue`]
//! - **Application Layer** ([`application`]) - Link creation and cache-aside
//!   redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and Redis
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Redirects
//!
//! A redirect costs one cache read, or one cache read plus one store read on
//! a miss. Cache population and visit counting happen in the background; the
//! visitor queue merges visits per code so a burst of N redirects to the same
//! code becomes one `UPDATE`.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ShortLinkService;
    pub use crate::domain::entities::{CreateShortLink, NewShortLink, ShortLink};
    pub use crate::domain::repositories::ShortLinkRepository;
    pub use crate::domain::visitor_queue::VisitorQueue;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
