//! Authentication Handlers

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::application::dto::request::{
    ChangePasswordRequest, CreateInvitationRequest, CreateResetTokenRequest, RegisterRequest,
    ResetPasswordRequest, SignInRequest,
};
use crate::application::dto::response::{IssuedTokenResponse, RegisterResponse, TokenResponse};
use crate::application::services::Registration;
use crate::presentation::http::extractors::AppJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

/// Register a new user with an invitation token
pub async fn register(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    validate(&body)?;

    let (user, tokens) = state
        .auth
        .register(Registration {
            email: body.email,
            password: body.password,
            name: body.name,
            token: body.token,
            locale: body.locale.unwrap_or_default(),
        })
        .await?;

    let response = RegisterResponse {
        user: user.into(),
        token: tokens.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Sign in with credentials
pub async fn sign_in(
    State(state): State<AppState>,
    AppJson(body): AppJson<SignInRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    validate(&body)?;

    let tokens = state.auth.sign_in(&body.email, &body.password).await?;

    Ok(Json(tokens.into()))
}

/// Change the caller's password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    AppJson(body): AppJson<ChangePasswordRequest>,
) -> Result<StatusCode, AppError> {
    validate(&body)?;

    state
        .auth
        .change_password(auth.user_id, &body.current_password, &body.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reset a password with an admin-issued reset token
pub async fn reset_password(
    State(state): State<AppState>,
    AppJson(body): AppJson<ResetPasswordRequest>,
) -> Result<StatusCode, AppError> {
    validate(&body)?;

    state
        .auth
        .reset_password(&body.email, &body.token, &body.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Issue a registration invitation (admin)
pub async fn create_invitation(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    AppJson(body): AppJson<CreateInvitationRequest>,
) -> Result<(StatusCode, Json<IssuedTokenResponse>), AppError> {
    validate(&body)?;

    let issued = state
        .auth
        .create_invitation(auth.user_id, body.email.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(issued.into())))
}

/// Issue a password reset token (admin)
pub async fn create_reset_token(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateResetTokenRequest>,
) -> Result<(StatusCode, Json<IssuedTokenResponse>), AppError> {
    validate(&body)?;

    let issued = state.auth.create_reset_token(&body.email).await?;

    Ok((StatusCode::CREATED, Json(issued.into())))
}
