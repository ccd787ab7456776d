//! REST API endpoint tests

mod auth_tests;
mod content_tests;
mod dictionary_tests;
mod hashtag_tests;
mod health_tests;
mod user_tests;
