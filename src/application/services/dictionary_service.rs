//! Dictionary Service
//!
//! Word lookup (prefix or exact, paged) and entry creation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::dto::request::DEFAULT_LOOKUP_LIMIT;
use crate::domain::{Lang, MatchMode, Word, WordOrder, WordQuery, WordRepository};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Refinements of a lookup. Values are assumed validated.
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// `Some(1)` for an exact match, otherwise prefix
    pub keyword: Option<u8>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    /// `Some("rank")` orders by rank
    pub sort: Option<String>,
}

/// A new dictionary entry.
#[derive(Debug, Clone)]
pub struct NewWord {
    pub word: String,
    pub lang: Lang,
    pub definition: Option<String>,
    pub keyword: bool,
    pub rank: i32,
}

#[async_trait]
pub trait DictionaryService: Send + Sync {
    /// Find matching words; no match is an empty list
    async fn find_word(
        &self,
        word: &str,
        lang: Lang,
        options: LookupOptions,
    ) -> Result<Vec<Word>, AppError>;

    /// Add an entry
    async fn add_word(&self, word: NewWord) -> Result<Word, AppError>;
}

/// Translate validated lookup input into a repository query.
pub fn build_query(word: &str, lang: Lang, options: &LookupOptions) -> WordQuery {
    WordQuery {
        text: word.to_string(),
        lang,
        mode: if options.keyword == Some(1) {
            MatchMode::Exact
        } else {
            MatchMode::Prefix
        },
        order: match options.sort.as_deref() {
            Some("rank") => WordOrder::Rank,
            _ => WordOrder::Storage,
        },
        skip: options.skip.unwrap_or(0).max(0),
        limit: options.limit.unwrap_or(DEFAULT_LOOKUP_LIMIT).max(1),
    }
}

pub struct DictionaryServiceImpl<W: WordRepository> {
    word_repo: Arc<W>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<W: WordRepository> DictionaryServiceImpl<W> {
    pub fn new(word_repo: Arc<W>, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            word_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<W: WordRepository + 'static> DictionaryService for DictionaryServiceImpl<W> {
    async fn find_word(
        &self,
        word: &str,
        lang: Lang,
        options: LookupOptions,
    ) -> Result<Vec<Word>, AppError> {
        let query = build_query(word, lang, &options);
        let words = self.word_repo.find(&query).await?;
        tracing::debug!(lang = %lang, mode = ?query.mode, hits = words.len(), "Dictionary lookup");
        Ok(words)
    }

    async fn add_word(&self, word: NewWord) -> Result<Word, AppError> {
        let entry = Word {
            id: self.id_generator.generate(),
            word: word.word,
            lang: word.lang,
            definition: word.definition,
            keyword: word.keyword,
            rank: word.rank,
            created_at: Utc::now(),
        };
        self.word_repo.create(&entry).await
    }
}
