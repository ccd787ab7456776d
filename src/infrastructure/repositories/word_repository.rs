//! Word Repository Implementation
//!
//! Dictionary lookups against the `words` table. Both sides of every
//! comparison go through `fold_word`, which lower-cases and strips
//! diacritics, so `Huis`, `huis` and `húis` are the same word.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{escape_like, Lang, MatchMode, Word, WordOrder, WordQuery, WordRepository};
use crate::shared::error::AppError;

const WORD_COLUMNS: &str = "id, word, lang, definition, keyword, rank, created_at";

#[derive(Debug, sqlx::FromRow)]
struct WordRow {
    id: i64,
    word: String,
    lang: String,
    definition: Option<String>,
    keyword: bool,
    rank: i32,
    created_at: DateTime<Utc>,
}

impl WordRow {
    fn into_word(self) -> Result<Word, AppError> {
        let lang = self.lang.parse::<Lang>().map_err(AppError::Internal)?;
        Ok(Word {
            id: self.id,
            word: self.word,
            lang,
            definition: self.definition,
            keyword: self.keyword,
            rank: self.rank,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL word repository implementation.
#[derive(Clone)]
pub struct PgWordRepository {
    pool: PgPool,
}

impl PgWordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the lookup statement for a query shape.
fn lookup_sql(mode: MatchMode, order: WordOrder) -> String {
    let predicate = match mode {
        MatchMode::Exact => "fold_word(word) = fold_word($2)",
        MatchMode::Prefix => r"fold_word(word) LIKE fold_word($2) || '%' ESCAPE '\'",
    };
    let order_by = match order {
        WordOrder::Storage => "id ASC",
        WordOrder::Rank => "rank DESC, id ASC",
    };

    format!(
        "SELECT {WORD_COLUMNS} FROM words WHERE lang = $1 AND {predicate} \
         ORDER BY {order_by} OFFSET $3 LIMIT $4"
    )
}

#[async_trait]
impl WordRepository for PgWordRepository {
    async fn find(&self, query: &WordQuery) -> Result<Vec<Word>, AppError> {
        let text = match query.mode {
            MatchMode::Exact => query.text.clone(),
            MatchMode::Prefix => escape_like(&query.text),
        };

        let rows = sqlx::query_as::<_, WordRow>(&lookup_sql(query.mode, query.order))
            .bind(query.lang.as_str())
            .bind(text)
            .bind(query.skip)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(WordRow::into_word).collect()
    }

    async fn create(&self, word: &Word) -> Result<Word, AppError> {
        let row = sqlx::query_as::<_, WordRow>(&format!(
            r#"
            INSERT INTO words (id, word, lang, definition, keyword, rank, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(word.id)
        .bind(&word.word)
        .bind(word.lang.as_str())
        .bind(&word.definition)
        .bind(word.keyword)
        .bind(word.rank)
        .bind(word.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                format!("Word '{}' already exists for language '{}'", word.word, word.lang),
            ),
            _ => AppError::Database(e),
        })?;

        row.into_word()
    }
}
