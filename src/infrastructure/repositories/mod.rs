//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - Accounts, credentials and roles
//! - **PgWordRepository** - Folded dictionary lookups
//! - **PgContentRepository** - Content documents
//! - **PgHashtagRepository** - Tag usage aggregated from content
//! - **PgInvitationRepository** - Single-use registration invitations
//! - **PgPasswordResetRepository** - Single-use password reset tokens
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgUserRepository, PgWordRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let word_repo = PgWordRepository::new(pool.clone());
//! }
//! ```

pub mod content_repository;
pub mod hashtag_repository;
pub mod invitation_repository;
pub mod password_reset_repository;
pub mod user_repository;
pub mod word_repository;

pub use content_repository::PgContentRepository;
pub use hashtag_repository::PgHashtagRepository;
pub use invitation_repository::PgInvitationRepository;
pub use password_reset_repository::PgPasswordResetRepository;
pub use user_repository::PgUserRepository;
pub use word_repository::PgWordRepository;
