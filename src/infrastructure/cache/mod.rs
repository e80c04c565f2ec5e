//! Fast cache in front of the durable store for redirect lookups.
//!
//! - [`RedisCache`] - Redis-backed cache with per-entry TTL
//! - [`NullCache`] - Always misses; used when Redis is not available

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
