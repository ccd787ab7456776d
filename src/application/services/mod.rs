//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration, sign-in, password change/reset, invitations
//! - **UserService**: Profile management
//! - **DictionaryService**: Word lookup and entry creation
//! - **HashtagService**: Hashtag index aggregation
//! - **ContentService**: Content document retrieval and upsert
//! - **SeedService**: Idempotent admin/demo account seeding

pub mod auth_service;
pub mod content_service;
pub mod dictionary_service;
pub mod hashtag_service;
pub mod seed_service;
pub mod user_service;

pub use auth_service::{AuthError, AuthService, AuthServiceImpl, AuthTokens, IssuedToken, Registration};
pub use content_service::{ContentService, ContentServiceImpl};
pub use dictionary_service::{DictionaryService, DictionaryServiceImpl, LookupOptions, NewWord};
pub use hashtag_service::{HashtagService, HashtagServiceImpl};
pub use seed_service::{SeedReport, SeedService};
pub use user_service::{UpdateProfile, UserService, UserServiceImpl};
