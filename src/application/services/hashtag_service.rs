//! Hashtag Service
//!
//! The hashtag index is aggregated from content documents on every call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{group_hashtags, index_key, normalize_hashtag, HashtagGroup, HashtagRepository};
use crate::shared::error::AppError;

#[async_trait]
pub trait HashtagService: Send + Sync {
    /// Every tag in use, grouped by initial
    async fn get_hashtag_index(&self) -> Result<Vec<HashtagGroup>, AppError>;

    /// The group entry for a single tag
    async fn find_hashtag(&self, name: &str) -> Result<HashtagGroup, AppError>;
}

pub struct HashtagServiceImpl<H: HashtagRepository> {
    hashtag_repo: Arc<H>,
}

impl<H: HashtagRepository> HashtagServiceImpl<H> {
    pub fn new(hashtag_repo: Arc<H>) -> Self {
        Self { hashtag_repo }
    }
}

#[async_trait]
impl<H: HashtagRepository + 'static> HashtagService for HashtagServiceImpl<H> {
    async fn get_hashtag_index(&self) -> Result<Vec<HashtagGroup>, AppError> {
        let counts = self.hashtag_repo.usage_counts().await?;
        Ok(group_hashtags(counts))
    }

    async fn find_hashtag(&self, name: &str) -> Result<HashtagGroup, AppError> {
        let not_found = || AppError::NotFound(format!("Hashtag '{}' not found", name));

        let name = normalize_hashtag(name).ok_or_else(not_found)?;
        let count = self
            .hashtag_repo
            .usage_count(&name)
            .await?
            .ok_or_else(not_found)?;

        Ok(HashtagGroup {
            key: index_key(&count.name),
            tags: vec![count],
        })
    }
}
