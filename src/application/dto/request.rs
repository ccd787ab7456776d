//! Request DTOs
//!
//! Data structures for API request bodies and query strings. Every DTO is
//! validated before any service is called.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::domain::{normalize_hashtag, Lang, Locale};

/// Minimum password length accepted anywhere a password is submitted.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum page size for dictionary lookups.
pub const MAX_LOOKUP_LIMIT: i64 = 100;

/// Page size when `limit` is omitted.
pub const DEFAULT_LOOKUP_LIMIT: i64 = 20;

/// Deserialize a string with surrounding whitespace removed, so length
/// rules apply to what is stored.
fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

fn trimmed_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<String>::deserialize(deserializer).map(|s| s.map(|s| s.trim().to_string()))
}

fn validate_lang(lang: &str) -> Result<(), ValidationError> {
    lang.parse::<Lang>().map(|_| ()).map_err(|_| {
        ValidationError::new("lang").with_message("Language must be one of: id, nl".into())
    })
}

fn validate_sort(sort: &str) -> Result<(), ValidationError> {
    if sort == "rank" {
        Ok(())
    } else {
        Err(ValidationError::new("sort").with_message("Sort must be: rank".into()))
    }
}

fn validate_hashtags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().all(|tag| normalize_hashtag(tag).is_some()) {
        Ok(())
    } else {
        Err(ValidationError::new("hashtags")
            .with_message("Hashtags must be single words of at most 64 characters".into()))
    }
}

/// Content ids are URL slugs: lower-case ASCII letters, digits and dashes.
pub fn validate_slug(id: &str) -> Result<(), ValidationError> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("id")
            .with_message("Id must be 1-64 characters of a-z, 0-9 and '-'".into()))
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Invitation token is required"))]
    pub token: String,

    pub locale: Option<Locale>,
}

/// Sign-in request
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,
}

/// Change password request (authenticated)
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub current_password: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub new_password: String,
}

/// Reset password request (reset token issued by an admin)
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Reset token is required"))]
    pub token: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,
}

/// Invitation request; `email` restricts the invitation to one address.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateInvitationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Reset token request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateResetTokenRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Update profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: Option<String>,

    pub locale: Option<Locale>,
}

/// Dictionary lookup query parameters
#[derive(Debug, Default, Deserialize)]
pub struct LookupQueryParams {
    pub keyword: Option<u8>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

/// Dictionary lookup: path segments plus query parameters.
#[derive(Debug, Validate)]
pub struct FindWordRequest {
    #[validate(length(min = 2, max = 128, message = "Word must be 2-128 characters"))]
    pub word: String,

    #[validate(custom(function = "validate_lang"))]
    pub lang: String,

    #[validate(range(min = 0, max = 1, message = "Keyword must be 0 or 1"))]
    pub keyword: Option<u8>,

    #[validate(range(min = 0, message = "Skip must be 0 or greater"))]
    pub skip: Option<i64>,

    #[validate(range(min = 1, max = 100, message = "Limit must be 1-100"))]
    pub limit: Option<i64>,

    #[validate(custom(function = "validate_sort"))]
    pub sort: Option<String>,
}

impl FindWordRequest {
    pub fn new(lang: String, word: String, params: LookupQueryParams) -> Self {
        Self {
            word: word.trim().to_string(),
            lang,
            keyword: params.keyword,
            skip: params.skip,
            limit: params.limit,
            sort: params.sort,
        }
    }
}

/// Create dictionary entry request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWordRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 128, message = "Word must be 2-128 characters"))]
    pub word: String,

    #[validate(custom(function = "validate_lang"))]
    pub lang: String,

    #[validate(length(max = 2000, message = "Definition must be at most 2000 characters"))]
    pub definition: Option<String>,

    #[serde(default)]
    pub keyword: bool,

    #[serde(default)]
    pub rank: i32,
}

/// Create or replace a content document
#[derive(Debug, Deserialize, Validate)]
pub struct PutContentRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 100000, message = "Body must be at most 100000 characters"))]
    pub body: String,

    #[serde(default)]
    #[validate(custom(function = "validate_hashtags"))]
    pub hashtags: Vec<String>,
}
