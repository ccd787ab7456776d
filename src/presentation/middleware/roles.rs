//! Role Guard
//!
//! Admits a request when the caller's token roles intersect the roles the
//! route declares. Must run inside [`auth_middleware`](super::auth_middleware).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::AuthUser;
use crate::domain::{roles_intersect, Role};
use crate::shared::error::AppError;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const ANY_ROLE: &[Role] = &Role::ALL;

/// Roles admitted by a route group.
#[derive(Debug, Clone, Copy)]
pub struct RequiredRoles(pub &'static [Role]);

/// Reject the request with 403 unless the caller holds one of the route's roles.
pub async fn require_roles(
    State(RequiredRoles(required)): State<RequiredRoles>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".into()))?;

    if !roles_intersect(&user.roles, required) {
        tracing::debug!(user_id = user.user_id, roles = ?user.roles, "Role check failed");
        return Err(AppError::Forbidden("Insufficient role".into()));
    }

    Ok(next.run(request).await)
}
