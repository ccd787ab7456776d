//! Seed Service
//!
//! Inserts the configured admin and demo accounts when they are absent.
//! Running it again is a no-op.

use std::sync::Arc;

use chrono::Utc;

use crate::config::{SeedAccount, SeedSettings};
use crate::domain::{normalize_email, Locale, Role, User, UserRepository};
use crate::shared::crypto::Passwords;
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub existing: usize,
}

pub struct SeedService<U: UserRepository> {
    user_repo: Arc<U>,
    id_generator: Arc<SnowflakeGenerator>,
    passwords: Passwords,
}

impl<U: UserRepository> SeedService<U> {
    pub fn new(user_repo: Arc<U>, id_generator: Arc<SnowflakeGenerator>, passwords: Passwords) -> Self {
        Self {
            user_repo,
            id_generator,
            passwords,
        }
    }

    /// Apply every configured seed account.
    pub async fn run(&self, seed: &SeedSettings) -> Result<SeedReport, AppError> {
        let accounts = [
            (seed.admin.as_ref(), vec![Role::Admin, Role::User]),
            (seed.demo.as_ref(), vec![Role::Demo]),
        ];

        let mut report = SeedReport::default();
        for (account, roles) in accounts {
            let Some(account) = account else { continue };
            if self.ensure_account(account, roles).await? {
                report.created += 1;
            } else {
                report.existing += 1;
            }
        }

        tracing::info!(created = report.created, existing = report.existing, "Seed accounts applied");
        Ok(report)
    }

    /// Returns `true` when the account was created.
    async fn ensure_account(&self, account: &SeedAccount, roles: Vec<Role>) -> Result<bool, AppError> {
        let email = normalize_email(&account.email);
        if self.user_repo.email_exists(&email).await? {
            return Ok(false);
        }

        let password_hash = self.passwords.hash(&account.password).map_err(AppError::Internal)?;
        let now = Utc::now();
        let user = User {
            id: self.id_generator.generate(),
            email,
            password_hash,
            name: account.name.clone(),
            locale: Locale::default(),
            roles,
            created_at: now,
            updated_at: now,
        };

        match self.user_repo.create(&user).await {
            Ok(created) => {
                tracing::info!(user_id = created.id, email = %created.email, "Seed account created");
                Ok(true)
            }
            // Another instance seeded concurrently.
            Err(AppError::Conflict(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
