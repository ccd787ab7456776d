//! Invitation Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::user_repository::insert_user;
use crate::domain::{Invitation, InvitationRepository, User};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct InvitationRow {
    id: i64,
    token_hash: String,
    email: Option<String>,
    created_by: i64,
    expires_at: DateTime<Utc>,
    used_at: Option<DateTime<Utc>>,
}

impl From<InvitationRow> for Invitation {
    fn from(row: InvitationRow) -> Self {
        Invitation {
            id: row.id,
            token_hash: row.token_hash,
            email: row.email,
            created_by: row.created_by,
            expires_at: row.expires_at,
            used_at: row.used_at,
        }
    }
}

/// PostgreSQL invitation repository implementation.
#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        let row = sqlx::query_as::<_, InvitationRow>(
            r#"
            INSERT INTO invitations (id, token_hash, email, created_by, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, token_hash, email, created_by, expires_at, used_at
            "#,
        )
        .bind(invitation.id)
        .bind(&invitation.token_hash)
        .bind(&invitation.email)
        .bind(invitation.created_by)
        .bind(invitation.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Invitation>, AppError> {
        let row = sqlx::query_as::<_, InvitationRow>(
            r#"
            SELECT id, token_hash, email, created_by, expires_at, used_at
            FROM invitations
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Invitation::from))
    }

    async fn redeem(&self, id: i64, user: &User) -> Result<Option<User>, AppError> {
        let mut tx = self.pool.begin().await?;

        let claimed =
            sqlx::query("UPDATE invitations SET used_at = NOW() WHERE id = $1 AND used_at IS NULL")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        if claimed.rows_affected() == 0 {
            return Ok(None);
        }

        // Dropping `tx` on a failed insert rolls the claim back.
        let created = insert_user(&mut *tx, user).await?;
        tx.commit().await?;

        Ok(Some(created))
    }
}
