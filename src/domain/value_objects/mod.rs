//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Role**: account role (`admin`, `user`, `demo`) and the intersection rule
//! - **Locale / Lang**: interface locale and dictionary language
//! - **HashtagGroup**: tag usage counts grouped under an index key

mod hashtag;
mod language;
mod role;

pub use hashtag::*;
pub use language::*;
pub use role::*;
