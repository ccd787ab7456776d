//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod crypto;
pub mod error;
pub mod jwt;
pub mod snowflake;
pub mod validation;
