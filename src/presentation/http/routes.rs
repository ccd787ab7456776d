//! Route Configuration
//!
//! Configures all HTTP routes for the API. Protected groups get the role
//! guard first and authentication last, so authentication runs first.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use crate::domain::Role;
use crate::presentation::middleware::{
    apply_security_headers, auth_middleware, require_roles, RequiredRoles, SecurityHeadersConfig,
    ADMIN_ONLY, ANY_ROLE,
};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(auth_routes(&state))
        .merge(user_routes(&state))
        .merge(dictionary_routes(&state))
        .merge(hashtag_routes())
        .merge(content_routes(&state))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness));

    let security = SecurityHeadersConfig::for_environment(&state.settings.environment);
    apply_security_headers(router, &security).with_state(state)
}

/// Require a valid token whose roles intersect `roles`.
fn protect(router: Router<AppState>, state: &AppState, roles: &'static [Role]) -> Router<AppState> {
    router
        .route_layer(middleware::from_fn_with_state(RequiredRoles(roles), require_roles))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .route("/auth/reset-password", post(handlers::auth::reset_password));

    let signed_in = Router::new().route(
        "/auth/change-password",
        post(handlers::auth::change_password),
    );

    let admin = Router::new()
        .route("/auth/invitations", post(handlers::auth::create_invitation))
        .route("/auth/reset-tokens", post(handlers::auth::create_reset_token));

    public
        .merge(protect(signed_in, state, ANY_ROLE))
        .merge(protect(admin, state, ADMIN_ONLY))
}

fn user_routes(state: &AppState) -> Router<AppState> {
    let signed_in = Router::new().route(
        "/users/me",
        get(handlers::user::get_current_user).patch(handlers::user::update_current_user),
    );

    let admin = Router::new().route("/users", get(handlers::user::list_users));

    protect(signed_in, state, ANY_ROLE).merge(protect(admin, state, ADMIN_ONLY))
}

fn dictionary_routes(state: &AppState) -> Router<AppState> {
    let signed_in = Router::new().route(
        "/dictionary/{lang}/{word}",
        get(handlers::dictionary::find_word),
    );

    let admin = Router::new().route("/dictionary", post(handlers::dictionary::add_word));

    protect(signed_in, state, ANY_ROLE).merge(protect(admin, state, ADMIN_ONLY))
}

fn hashtag_routes() -> Router<AppState> {
    Router::new()
        .route("/hashtags", get(handlers::hashtag::get_hashtag_index))
        .route("/hashtags/{name}", get(handlers::hashtag::find_hashtag))
}

fn content_routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/content", get(handlers::content::list_content))
        .route("/content/{id}", get(handlers::content::get_content));

    let admin = Router::new().route("/content/{id}", put(handlers::content::put_content));

    public.merge(protect(admin, state, ADMIN_ONLY))
}
