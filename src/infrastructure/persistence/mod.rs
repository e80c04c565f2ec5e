//! PostgreSQL repository implementations.
//!
//! Queries are bound at runtime through SQLx; the schema lives in
//! `migrations/` and is applied at startup.

pub mod pg_short_link_repository;

pub use pg_short_link_repository::PgShortLinkRepository;
