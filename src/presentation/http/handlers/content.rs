//! Content Handlers

use axum::{extract::State, Json};

use crate::application::dto::request::{validate_slug, PutContentRequest};
use crate::domain::{Content, ContentSummary};
use crate::presentation::http::extractors::{AppJson, AppPath};
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

pub async fn list_content(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentSummary>>, AppError> {
    Ok(Json(state.content.list_content().await?))
}

pub async fn get_content(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Content>, AppError> {
    Ok(Json(state.content.get_content(&id).await?))
}

/// Create or replace a document (admin)
pub async fn put_content(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(body): AppJson<PutContentRequest>,
) -> Result<Json<Content>, AppError> {
    validate_slug(&id).map_err(|e| {
        let message = e.message.map(|m| m.to_string()).unwrap_or_else(|| "Invalid id".into());
        AppError::invalid_field("id", message)
    })?;
    validate(&body)?;

    let content = state
        .content
        .put_content(&id, body.title, body.body, body.hashtags)
        .await?;

    Ok(Json(content))
}
