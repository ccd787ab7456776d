//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//! - Plain variables: DATABASE_URL, JWT_SECRET, SERVER_HOST, SERVER_PORT,
//!   ADMIN_EMAIL/ADMIN_PASSWORD/ADMIN_NAME, DEMO_EMAIL/DEMO_PASSWORD/DEMO_NAME
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taalwiz_server::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;

#[cfg(test)]
pub(crate) use settings::test_settings;
