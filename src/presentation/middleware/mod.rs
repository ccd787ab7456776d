//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod logging;
pub mod roles;
pub mod security;

pub use auth::{auth_middleware, AuthUser};
pub use roles::{require_roles, RequiredRoles, ADMIN_ONLY, ANY_ROLE};
pub use security::{apply_security_headers, SecurityHeadersConfig};
