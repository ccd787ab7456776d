//! User Handlers

use axum::{extract::State, Extension, Json};

use crate::application::dto::request::UpdateProfileRequest;
use crate::application::dto::response::UserResponse;
use crate::application::services::UpdateProfile;
use crate::presentation::http::extractors::AppJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get_user(auth.user_id).await?;
    Ok(Json(user.into()))
}

/// Update current user profile
pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    AppJson(body): AppJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    validate(&body)?;

    let update = UpdateProfile {
        name: body.name,
        locale: body.locale,
    };
    let user = state.users.update_profile(auth.user_id, update).await?;

    Ok(Json(user.into()))
}

/// List all users (admin)
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
