//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{AuthTokens, IssuedToken};
use crate::domain::{Lang, Locale, Role, User, Word};

/// Access token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl From<AuthTokens> for TokenResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            expires_in: tokens.expires_in,
            token_type: tokens.token_type,
        }
    }
}

/// Registration response (includes user and token)
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub token: TokenResponse,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub locale: Locale,
    pub roles: Vec<Role>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            locale: user.locale,
            roles: user.roles,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Opaque invitation or reset token, shown once.
#[derive(Debug, Serialize)]
pub struct IssuedTokenResponse {
    pub token: String,
    pub expires_at: String,
}

impl From<IssuedToken> for IssuedTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_at: issued.expires_at.to_rfc3339(),
        }
    }
}

/// Dictionary entry response
#[derive(Debug, Serialize)]
pub struct WordResponse {
    pub id: String,
    pub word: String,
    pub lang: Lang,
    pub definition: Option<String>,
    pub keyword: bool,
    pub rank: i32,
}

impl From<Word> for WordResponse {
    fn from(word: Word) -> Self {
        Self {
            id: word.id.to_string(),
            word: word.word,
            lang: word.lang,
            definition: word.definition,
            keyword: word.keyword,
            rank: word.rank,
        }
    }
}
