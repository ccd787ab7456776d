//! Authentication Service
//!
//! Registration by invitation, sign-in, password change and reset, and the
//! admin-issued single-use tokens those flows consume.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::config::{AuthSettings, JwtSettings};
use crate::domain::{
    normalize_email, Invitation, InvitationRepository, Locale, PasswordResetRepository,
    PasswordResetToken, Role, User, UserRepository,
};
use crate::shared::crypto::{generate_token, hash_token, Passwords};
use crate::shared::error::AppError;
use crate::shared::jwt::{self, JwtPayload, TokenError};
use crate::shared::snowflake::SnowflakeGenerator;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with an invitation token
    async fn register(&self, registration: Registration) -> Result<(User, AuthTokens), AuthError>;

    /// Authenticate user with credentials
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthTokens, AuthError>;

    /// Replace the password after re-checking the current one
    async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError>;

    /// Replace the password using a reset token
    async fn reset_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AuthError>;

    /// Issue an invitation, optionally bound to one email address
    async fn create_invitation(
        &self,
        created_by: i64,
        email: Option<&str>,
    ) -> Result<IssuedToken, AuthError>;

    /// Issue a password reset token for an existing user
    async fn create_reset_token(&self, email: &str) -> Result<IssuedToken, AuthError>;

    /// Validate an access token and return its claims
    fn validate_token(&self, access_token: &str) -> Result<JwtPayload, AuthError>;
}

/// Input of a registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub token: String,
    pub locale: Locale,
}

/// Access token response
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// An opaque single-use token, returned to the issuer exactly once.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired invitation token")]
    InvalidInvitation,

    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Email already exists")]
    EmailExists,

    #[error("User not found")]
    UnknownAccount,

    #[error(transparent)]
    Repository(#[from] AppError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => AppError::Unauthorized("Invalid email or password".into()),
            AuthError::InvalidInvitation | AuthError::InvalidResetToken | AuthError::TokenExpired | AuthError::InvalidToken => {
                AppError::Unauthorized(error.to_string())
            }
            AuthError::EmailExists => AppError::Conflict("Email already registered".into()),
            AuthError::UnknownAccount => AppError::NotFound("User not found".into()),
            AuthError::Repository(inner) => inner,
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::InvalidToken,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}

/// AuthService implementation
pub struct AuthServiceImpl<U, I, R>
where
    U: UserRepository,
    I: InvitationRepository,
    R: PasswordResetRepository,
{
    user_repo: Arc<U>,
    invitation_repo: Arc<I>,
    reset_repo: Arc<R>,
    id_generator: Arc<SnowflakeGenerator>,
    passwords: Passwords,
    jwt_settings: JwtSettings,
    auth_settings: AuthSettings,
}

impl<U, I, R> AuthServiceImpl<U, I, R>
where
    U: UserRepository,
    I: InvitationRepository,
    R: PasswordResetRepository,
{
    /// Create a new AuthServiceImpl
    pub fn new(
        user_repo: Arc<U>,
        invitation_repo: Arc<I>,
        reset_repo: Arc<R>,
        id_generator: Arc<SnowflakeGenerator>,
        passwords: Passwords,
        jwt_settings: JwtSettings,
        auth_settings: AuthSettings,
    ) -> Self {
        Self {
            user_repo,
            invitation_repo,
            reset_repo,
            id_generator,
            passwords,
            jwt_settings,
            auth_settings,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        self.passwords.hash(password).map_err(AuthError::Internal)
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        self.passwords.verify(password, hash).map_err(AuthError::Internal)
    }

    /// Sign an access token carrying the user's current roles
    fn generate_tokens(&self, user: &User) -> Result<AuthTokens, AuthError> {
        let payload = JwtPayload::new(&self.jwt_settings, user.id, &user.email, &user.roles, Utc::now());
        let access_token = jwt::sign(&self.jwt_settings, &payload)?;

        Ok(AuthTokens {
            access_token,
            expires_in: self.jwt_settings.access_token_expiry_minutes * 60,
            token_type: "Bearer".to_string(),
        })
    }
}

#[async_trait]
impl<U, I, R> AuthService for AuthServiceImpl<U, I, R>
where
    U: UserRepository + 'static,
    I: InvitationRepository + 'static,
    R: PasswordResetRepository + 'static,
{
    async fn register(&self, registration: Registration) -> Result<(User, AuthTokens), AuthError> {
        let email = normalize_email(&registration.email);

        if self.user_repo.email_exists(&email).await? {
            return Err(AuthError::EmailExists);
        }

        let invitation = self
            .invitation_repo
            .find_by_token_hash(&hash_token(&registration.token))
            .await?
            .filter(|inv| inv.is_active() && inv.admits(&email))
            .ok_or(AuthError::InvalidInvitation)?;

        let password_hash = self.hash_password(&registration.password)?;

        let now = Utc::now();
        let user = User {
            id: self.id_generator.generate(),
            email,
            password_hash,
            name: registration.name,
            locale: registration.locale,
            roles: vec![Role::User],
            created_at: now,
            updated_at: now,
        };

        let created_user = self
            .invitation_repo
            .redeem(invitation.id, &user)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => AuthError::EmailExists,
                e => AuthError::Repository(e),
            })?
            .ok_or(AuthError::InvalidInvitation)?;

        tracing::info!(user_id = created_user.id, invitation_id = invitation.id, "User registered");

        let tokens = self.generate_tokens(&created_user)?;
        Ok((created_user, tokens))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthTokens, AuthError> {
        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = user.id, "Sign-in rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.generate_tokens(&user)
    }

    async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_password(current_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let password_hash = self.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &password_hash).await?;

        tracing::info!(user_id = user.id, "Password changed");
        Ok(())
    }

    async fn reset_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        let reset = self
            .reset_repo
            .find_by_token_hash(&hash_token(token))
            .await?
            .filter(|reset| reset.is_active() && reset.user_id == user.id)
            .ok_or(AuthError::InvalidResetToken)?;

        let password_hash = self.hash_password(new_password)?;

        if !self.reset_repo.redeem(reset.id, &password_hash).await? {
            return Err(AuthError::InvalidResetToken);
        }

        tracing::info!(user_id = user.id, "Password reset");
        Ok(())
    }

    async fn create_invitation(
        &self,
        created_by: i64,
        email: Option<&str>,
    ) -> Result<IssuedToken, AuthError> {
        let token = generate_token();
        let invitation = Invitation {
            id: self.id_generator.generate(),
            token_hash: hash_token(&token),
            email: email.map(normalize_email),
            created_by,
            expires_at: Utc::now() + Duration::hours(self.auth_settings.invitation_expiry_hours),
            used_at: None,
        };

        let stored = self.invitation_repo.create(&invitation).await?;
        tracing::info!(invitation_id = stored.id, created_by, "Invitation issued");

        Ok(IssuedToken {
            token,
            expires_at: stored.expires_at,
        })
    }

    async fn create_reset_token(&self, email: &str) -> Result<IssuedToken, AuthError> {
        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::UnknownAccount)?;

        let token = generate_token();
        let reset = PasswordResetToken {
            id: self.id_generator.generate(),
            user_id: user.id,
            token_hash: hash_token(&token),
            expires_at: Utc::now() + Duration::minutes(self.auth_settings.reset_token_expiry_minutes),
            used_at: None,
        };

        let stored = self.reset_repo.create(&reset).await?;
        tracing::info!(user_id = user.id, "Password reset token issued");

        Ok(IssuedToken {
            token,
            expires_at: stored.expires_at,
        })
    }

    fn validate_token(&self, access_token: &str) -> Result<JwtPayload, AuthError> {
        Ok(jwt::verify(&self.jwt_settings, access_token)?)
    }
}
