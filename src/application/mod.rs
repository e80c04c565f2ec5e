//! Application layer services implementing business logic.
//!
//! Services consume repository and cache traits and expose the operations
//! used by HTTP handlers and the admin CLI.
//!
//! - [`services::short_link_service::ShortLinkService`] - Link creation and redirect resolution

pub mod services;
