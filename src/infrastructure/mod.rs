//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Connection pool and migrations (PostgreSQL)
//! - Database repositories

pub mod database;
pub mod repositories;
