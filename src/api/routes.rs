//! API route configuration.

use crate::api::handlers::create_short_link_handler;
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /links` - Create a short link (rate limited to 150 per hour per client)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_short_link_handler))
        .layer(rate_limit::create_layer())
}
