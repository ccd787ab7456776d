//! Hashtag Handlers

use axum::{extract::State, Json};

use crate::domain::HashtagGroup;
use crate::presentation::http::extractors::AppPath;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Full hashtag index grouped by initial
pub async fn get_hashtag_index(
    State(state): State<AppState>,
) -> Result<Json<Vec<HashtagGroup>>, AppError> {
    Ok(Json(state.hashtags.get_hashtag_index().await?))
}

/// Single tag; `#` prefix and case are ignored
pub async fn find_hashtag(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> Result<Json<HashtagGroup>, AppError> {
    Ok(Json(state.hashtags.find_hashtag(&name).await?))
}
