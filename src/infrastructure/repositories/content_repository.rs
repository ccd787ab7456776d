//! Content Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Content, ContentRepository, ContentSummary};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: String,
    title: String,
    body: String,
    hashtags: Vec<String>,
    updated_at: DateTime<Utc>,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Content {
            id: row.id,
            title: row.title,
            body: row.body,
            hashtags: row.hashtags,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL content repository implementation.
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Content>, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            "SELECT id, title, body, hashtags, updated_at FROM contents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Content::from))
    }

    async fn list(&self) -> Result<Vec<ContentSummary>, AppError> {
        let rows = sqlx::query_as::<_, (String, String)>("SELECT id, title FROM contents ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title)| ContentSummary { id, title })
            .collect())
    }

    async fn upsert(&self, content: &Content) -> Result<Content, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            INSERT INTO contents (id, title, body, hashtags, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                body = EXCLUDED.body,
                hashtags = EXCLUDED.hashtags,
                updated_at = EXCLUDED.updated_at
            RETURNING id, title, body, hashtags, updated_at
            "#,
        )
        .bind(&content.id)
        .bind(&content.title)
        .bind(&content.body)
        .bind(&content.hashtags)
        .bind(content.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
