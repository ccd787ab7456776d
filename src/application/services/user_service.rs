//! User Service
//!
//! Profile reads and updates.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Locale, User, UserRepository};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, user_id: i64) -> Result<User, AppError>;

    /// All users
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Update name and/or locale; omitted fields keep their value
    async fn update_profile(&self, user_id: i64, update: UpdateProfile) -> Result<User, AppError>;
}

/// Profile changes
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub locale: Option<Locale>,
}

/// UserService implementation
pub struct UserServiceImpl<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> UserServiceImpl<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U: UserRepository + 'static> UserService for UserServiceImpl<U> {
    async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list().await
    }

    async fn update_profile(&self, user_id: i64, update: UpdateProfile) -> Result<User, AppError> {
        let user = self.get_user(user_id).await?;

        let name = update.name.unwrap_or(user.name);
        let locale = update.locale.unwrap_or(user.locale);

        self.user_repo.update_profile(user_id, &name, locale).await
    }
}
