//! Password reset token entity and repository trait.
//!
//! Maps to the `password_reset_tokens` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// A single-use password reset grant for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordResetToken {
    pub id: i64,
    pub user_id: i64,
    /// SHA-256 hash of the opaque token (never store raw tokens)
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl PasswordResetToken {
    /// Unused and not yet expired.
    pub fn is_active(&self) -> bool {
        self.used_at.is_none() && self.expires_at > Utc::now()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    async fn create(&self, token: &PasswordResetToken) -> Result<PasswordResetToken, AppError>;

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, AppError>;

    /// Mark the token used and store the new password hash of its user as
    /// one unit. Returns `false` when the token was already used.
    async fn redeem(&self, id: i64, password_hash: &str) -> Result<bool, AppError>;
}
