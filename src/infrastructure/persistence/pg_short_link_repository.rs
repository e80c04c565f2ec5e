//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short links.
///
/// Code uniqueness is enforced by the `short_links_code_key` constraint and
/// surfaces as [`AppError::AlreadyExists`].
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    code: String,
    destination: String,
    visitors: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.code,
            row.destination,
            row.visitors,
            row.created_at,
            row.updated_at,
        )
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (code, destination)
            VALUES ($1, $2)
            RETURNING id, code, destination, visitors, created_at, updated_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.destination)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::AlreadyExists { message, .. } => AppError::AlreadyExists {
                message,
                details: json!({ "code": new_link.code }),
            },
            other => other,
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, code, destination, visitors, created_at, updated_at
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_visitors(&self, code: &str, visitors: u64) -> Result<(), AppError> {
        let increment = i64::try_from(visitors).unwrap_or(i64::MAX);

        let result = sqlx::query(
            r#"
            UPDATE short_links
            SET visitors = visitors + $2, updated_at = NOW()
            WHERE code = $1
            "#,
        )
        .bind(code)
        .bind(increment)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
