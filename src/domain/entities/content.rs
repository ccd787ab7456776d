//! Managed content documents and the hashtag aggregation over them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::HashtagCount;
use crate::shared::error::AppError;

/// A content document addressed by a slug, e.g. `about`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Normalized tag names.
    pub hashtags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Listing entry for a content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub id: String,
    pub title: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Content>, AppError>;

    /// Summaries ordered by id.
    async fn list(&self) -> Result<Vec<ContentSummary>, AppError>;

    /// Insert or replace the document with `content.id`.
    async fn upsert(&self, content: &Content) -> Result<Content, AppError>;
}

/// Query-time aggregation of tag usage across content documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HashtagRepository: Send + Sync {
    /// Number of documents per tag, for every tag in use.
    async fn usage_counts(&self) -> Result<Vec<HashtagCount>, AppError>;

    /// Number of documents carrying `name`; `None` when unused.
    async fn usage_count(&self, name: &str) -> Result<Option<HashtagCount>, AppError>;
}
