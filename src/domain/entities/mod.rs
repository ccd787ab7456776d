//! # Domain Entities
//!
//! Core domain entities. Each maps to one database table and comes with a
//! repository trait implemented in the infrastructure layer.
//!
//! - **User**: account with credentials, locale and roles
//! - **Word**: dictionary entry keyed by `(word, lang)`
//! - **Content**: managed content document carrying hashtags
//! - **Invitation**: single-use registration grant
//! - **PasswordResetToken**: single-use password reset grant

mod content;
mod invitation;
mod password_reset;
mod user;
mod word;

pub use content::{Content, ContentRepository, ContentSummary, HashtagRepository};
pub use invitation::{Invitation, InvitationRepository};
pub use password_reset::{PasswordResetRepository, PasswordResetToken};
pub use user::{normalize_email, User, UserRepository};
pub use word::{escape_like, MatchMode, Word, WordOrder, WordQuery, WordRepository};

#[cfg(test)]
pub use content::{MockContentRepository, MockHashtagRepository};
#[cfg(test)]
pub use invitation::MockInvitationRepository;
#[cfg(test)]
pub use password_reset::MockPasswordResetRepository;
#[cfg(test)]
pub use user::MockUserRepository;
#[cfg(test)]
pub use word::MockWordRepository;
