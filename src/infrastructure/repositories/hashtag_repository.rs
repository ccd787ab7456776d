//! Hashtag Repository Implementation
//!
//! Tag usage is not stored separately; it is aggregated from
//! `contents.hashtags` on every read.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{HashtagCount, HashtagRepository};
use crate::shared::error::AppError;

#[derive(Clone)]
pub struct PgHashtagRepository {
    pool: PgPool,
}

impl PgHashtagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HashtagRepository for PgHashtagRepository {
    async fn usage_counts(&self) -> Result<Vec<HashtagCount>, AppError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT tag, COUNT(*)::BIGINT
            FROM contents, unnest(hashtags) AS tag
            GROUP BY tag
            ORDER BY tag
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(name, count)| HashtagCount { name, count })
            .collect())
    }

    async fn usage_count(&self, name: &str) -> Result<Option<HashtagCount>, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM contents WHERE hashtags @> ARRAY[$1]::TEXT[]",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok((count > 0).then(|| HashtagCount {
            name: name.to_string(),
            count,
        }))
    }
}
