//! Registration invitation entity and repository trait.
//!
//! Maps to the `invitations` table. Only the SHA-256 hash of the opaque
//! invitation token is stored.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::User;
use crate::shared::error::AppError;

/// Represents a single-use invitation to register.
///
/// Maps to the `invitations` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - token_hash: CHAR(64) NOT NULL UNIQUE
/// - email: VARCHAR(255) NULL (restricts the invitation to one address)
/// - created_by: BIGINT NOT NULL REFERENCES users(id)
/// - expires_at: TIMESTAMPTZ NOT NULL
/// - used_at: TIMESTAMPTZ NULL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invitation {
    pub id: i64,

    #[serde(skip_serializing)]
    pub token_hash: String,

    pub email: Option<String>,
    pub created_by: i64,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl Invitation {
    /// Unused and not yet expired.
    pub fn is_active(&self) -> bool {
        self.used_at.is_none() && self.expires_at > Utc::now()
    }

    /// Whether `email` (already normalized) may register with this invitation.
    pub fn admits(&self, email: &str) -> bool {
        self.email.as_deref().map_or(true, |bound| bound == email)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError>;

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Invitation>, AppError>;

    /// Mark the invitation used and create `user` as one unit. Returns
    /// `None` when the invitation was already used; if creating the user
    /// fails the invitation stays unused.
    async fn redeem(&self, id: i64, user: &User) -> Result<Option<User>, AppError>;
}
