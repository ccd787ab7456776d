//! # Domain Layer
//!
//! Core types of the TaalWiz backend, independent of HTTP and storage.
//!
//! ## Structure
//!
//! - **entities**: User, Word, Content, Invitation, PasswordResetToken and
//!   their repository traits
//! - **value_objects**: Role, Locale, Lang, hashtag grouping
//!
//! Repository traits are defined here and implemented in the infrastructure
//! layer, so services depend only on this module.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
