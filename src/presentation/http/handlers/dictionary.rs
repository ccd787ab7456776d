//! Dictionary Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{CreateWordRequest, FindWordRequest, LookupQueryParams};
use crate::application::dto::response::WordResponse;
use crate::application::services::{LookupOptions, NewWord};
use crate::domain::Lang;
use crate::presentation::http::extractors::{AppJson, AppPath, AppQuery};
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

/// Look up a word: prefix match by default, exact with `keyword=1`
pub async fn find_word(
    State(state): State<AppState>,
    AppPath((lang, word)): AppPath<(String, String)>,
    AppQuery(params): AppQuery<LookupQueryParams>,
) -> Result<Json<Vec<WordResponse>>, AppError> {
    let request = FindWordRequest::new(lang, word, params);
    validate(&request)?;

    let lang: Lang = request
        .lang
        .parse()
        .map_err(|e: String| AppError::invalid_field("lang", e))?;
    let options = LookupOptions {
        keyword: request.keyword,
        skip: request.skip,
        limit: request.limit,
        sort: request.sort,
    };

    let words = state.dictionary.find_word(&request.word, lang, options).await?;

    Ok(Json(words.into_iter().map(WordResponse::from).collect()))
}

/// Add a dictionary entry (admin)
pub async fn add_word(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateWordRequest>,
) -> Result<(StatusCode, Json<WordResponse>), AppError> {
    validate(&body)?;

    let lang: Lang = body
        .lang
        .parse()
        .map_err(|e: String| AppError::invalid_field("lang", e))?;
    let word = state
        .dictionary
        .add_word(NewWord {
            word: body.word,
            lang,
            definition: body.definition,
            keyword: body.keyword,
            rank: body.rank,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(word.into())))
}
