//! Per-client rate limiting using the token bucket algorithm.
//!
//! Limits are keyed by the peer IP address, so the router must be served
//! with `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Builds a layer allowing `per_hour` requests per client and hour.
///
/// The whole hourly allowance is available as a burst and refills evenly.
fn hourly_layer(per_hour: u32) -> RateLimitLayer {
    let replenish_ms = 3_600_000 / u64::from(per_hour);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(per_hour)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for link creation: 150 requests per hour per client.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn create_layer() -> RateLimitLayer {
    hourly_layer(150)
}

/// Rate limiter for redirects: 1000 requests per hour per client.
pub fn redirect_layer() -> RateLimitLayer {
    hourly_layer(1000)
}
