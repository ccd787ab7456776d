//! Content Service

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{normalize_hashtag, Content, ContentRepository, ContentSummary};
use crate::shared::error::AppError;

#[async_trait]
pub trait ContentService: Send + Sync {
    async fn get_content(&self, id: &str) -> Result<Content, AppError>;

    async fn list_content(&self) -> Result<Vec<ContentSummary>, AppError>;

    /// Create or replace a document
    async fn put_content(
        &self,
        id: &str,
        title: String,
        body: String,
        hashtags: Vec<String>,
    ) -> Result<Content, AppError>;
}

pub struct ContentServiceImpl<C: ContentRepository> {
    content_repo: Arc<C>,
}

impl<C: ContentRepository> ContentServiceImpl<C> {
    pub fn new(content_repo: Arc<C>) -> Self {
        Self { content_repo }
    }
}

#[async_trait]
impl<C: ContentRepository + 'static> ContentService for ContentServiceImpl<C> {
    async fn get_content(&self, id: &str) -> Result<Content, AppError> {
        self.content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Content '{}' not found", id)))
    }

    async fn list_content(&self) -> Result<Vec<ContentSummary>, AppError> {
        self.content_repo.list().await
    }

    async fn put_content(
        &self,
        id: &str,
        title: String,
        body: String,
        hashtags: Vec<String>,
    ) -> Result<Content, AppError> {
        let mut tags: Vec<String> = hashtags.iter().filter_map(|t| normalize_hashtag(t)).collect();
        tags.sort();
        tags.dedup();

        let content = Content {
            id: id.to_string(),
            title,
            body,
            hashtags: tags,
            updated_at: Utc::now(),
        };

        let stored = self.content_repo.upsert(&content).await?;
        tracing::info!(content_id = %stored.id, hashtags = stored.hashtags.len(), "Content stored");
        Ok(stored)
    }
}
