//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod auth;
pub mod content;
pub mod dictionary;
pub mod hashtag;
pub mod health;
pub mod user;
