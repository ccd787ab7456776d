//! Dictionary word entity and repository trait.
//!
//! Maps to the `words` table. Matching is case- and accent-insensitive; the
//! folding rule lives in the database (`fold_word`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Lang;
use crate::shared::error::AppError;

/// A lexical entry keyed by `(word, lang)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub lang: Lang,
    pub definition: Option<String>,
    /// Marks headwords that are preferred in autocomplete.
    pub keyword: bool,
    /// Relevance; higher ranks first when ranking is requested.
    pub rank: i32,
    pub created_at: DateTime<Utc>,
}

/// How the search text is compared against stored words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Stored word starts with the search text.
    Prefix,
    /// Stored word equals the search text.
    Exact,
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
    /// Insertion order (id ascending).
    #[default]
    Storage,
    /// Rank descending, then id.
    Rank,
}

/// A validated dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    pub text: String,
    pub lang: Lang,
    pub mode: MatchMode,
    pub order: WordOrder,
    pub skip: i64,
    pub limit: i64,
}

/// Escape `%`, `_` and `\` so the text can be used as a LIKE prefix.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Repository trait for Word data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// Run a lookup; an empty vector is a valid outcome.
    async fn find(&self, query: &WordQuery) -> Result<Vec<Word>, AppError>;

    /// Insert a word. A word that folds to an existing `(word, lang)` yields
    /// `AppError::Conflict`.
    async fn create(&self, word: &Word) -> Result<Word, AppError>;
}
