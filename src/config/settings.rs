//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// JWT authentication settings
    pub jwt: JwtSettings,

    /// Invitation and password reset lifetimes
    pub auth: AuthSettings,

    /// Snowflake ID generator settings
    pub snowflake: SnowflakeSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Accounts inserted at startup when absent
    #[serde(default)]
    pub seed: SeedSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// JWT authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens (HS256)
    pub secret: String,

    /// `iss` claim written and required
    pub issuer: String,

    /// `aud` claim written and required
    pub audience: String,

    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

/// Lifetimes of the single-use tokens issued by admins.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Invitation validity in hours
    pub invitation_expiry_hours: i64,

    /// Password reset token validity in minutes
    pub reset_token_expiry_minutes: i64,
}

/// Snowflake ID generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeSettings {
    /// Machine/worker ID (0-1023)
    pub machine_id: u16,

    /// Custom epoch timestamp in milliseconds
    pub epoch: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Seed accounts. Either may be left unconfigured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedSettings {
    pub admin: Option<SeedAccount>,
    pub demo: Option<SeedAccount>,
}

/// Credentials of one seed account.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if JWT secret is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("jwt.issuer", "taalwiz")?
            .set_default("jwt.audience", "taalwiz-app")?
            .set_default("jwt.access_token_expiry_minutes", 60 * 24)?
            .set_default("auth.invitation_expiry_hours", 72)?
            .set_default("auth.reset_token_expiry_minutes", 60)?
            .set_default("snowflake.machine_id", 1)?
            .set_default("snowflake.epoch", crate::shared::snowflake::DEFAULT_EPOCH)?
            .set_default("cors.allowed_origins", vec!["http://localhost:8100"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("seed.admin.email", std::env::var("ADMIN_EMAIL").ok())?
            .set_override_option("seed.admin.password", std::env::var("ADMIN_PASSWORD").ok())?
            .set_override_option("seed.admin.name", std::env::var("ADMIN_NAME").ok())?
            .set_override_option("seed.demo.email", std::env::var("DEMO_EMAIL").ok())?
            .set_override_option("seed.demo.password", std::env::var("DEMO_PASSWORD").ok())?
            .set_override_option("seed.demo.name", std::env::var("DEMO_NAME").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate())
    }

    /// Reject settings that would weaken token signing or seed accounts.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters for security. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }

        for (label, account) in [("admin", &self.seed.admin), ("demo", &self.seed.demo)] {
            if let Some(account) = account {
                if account.password.chars().count() < crate::application::dto::request::MIN_PASSWORD_LENGTH {
                    return Err(ConfigError::Message(format!(
                        "Seed {} password must be at least {} characters",
                        label,
                        crate::application::dto::request::MIN_PASSWORD_LENGTH
                    )));
                }
            }
        }

        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Settings with a valid secret and no seeds, for tests.
#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/taalwiz_test".into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 1,
        },
        jwt: JwtSettings {
            secret: "x".repeat(MIN_JWT_SECRET_LENGTH),
            issuer: "taalwiz".into(),
            audience: "taalwiz-app".into(),
            access_token_expiry_minutes: 15,
        },
        auth: AuthSettings {
            invitation_expiry_hours: 1,
            reset_token_expiry_minutes: 10,
        },
        snowflake: SnowflakeSettings {
            machine_id: 1,
            epoch: crate::shared::snowflake::DEFAULT_EPOCH,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        seed: SeedSettings::default(),
        environment: "test".into(),
    }
}
