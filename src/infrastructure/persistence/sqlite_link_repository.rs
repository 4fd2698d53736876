//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_sqlx_error};

/// Relational backend storing links in a single `links` table.
///
/// Uniqueness is enforced by the `code` primary key, and the click counter
/// is bumped with a single `UPDATE ... RETURNING` statement, so every
/// primitive is atomic without explicit locking.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    target_url: String,
    total_clicks: i64,
    created_at: DateTime<Utc>,
    last_clicked: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            code: row.code,
            target_url: row.target_url,
            total_clicks: row.total_clicks,
            created_at: row.created_at,
            last_clicked: row.last_clicked,
        }
    }
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, code: &str, target_url: &str) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url, total_clicks, created_at, last_clicked)
            VALUES (?, ?, 0, ?, NULL)
            RETURNING code, target_url, total_clicks, created_at, last_clicked
            "#,
        )
        .bind(code)
        .bind(target_url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match map_sqlx_error(e) {
            AppError::Conflict { .. } => {
                AppError::conflict("Short code already exists", json!({ "code": code }))
            }
            other => other,
        })?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        // rowid breaks created_at ties by insertion order, newest first.
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, target_url, total_clicks, created_at, last_clicked
            FROM links
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, target_url, total_clicks, created_at, last_clicked
            FROM links
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<String>, AppError> {
        let target_url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET total_clicks = total_clicks + 1,
                last_clicked = ?
            WHERE code = ?
            RETURNING target_url
            "#,
        )
        .bind(Utc::now())
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target_url)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
