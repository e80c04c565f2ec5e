//! HTTP layer translating requests into service calls.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Rate limiting and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
