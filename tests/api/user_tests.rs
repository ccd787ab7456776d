//! User API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{unique_email, TestApp, DEMO_EMAIL};

#[tokio::test]
async fn test_get_current_user() {
    let app = TestApp::new().await;
    let demo = app.demo_token().await;

    let (status, body) = app.get("/users/me", Some(&demo)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], DEMO_EMAIL);
    assert_eq!(body["roles"], json!(["demo"]));
    assert_eq!(body["locale"], "en");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique_email(), "geheim123").await;

    let (status, body) = app
        .request(
            Method::PATCH,
            "/users/me",
            Some(json!({ "name": "Jan", "locale": "nl" })),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jan");
    assert_eq!(body["locale"], "nl");
}

#[tokio::test]
async fn test_update_profile_rejects_unknown_locale() {
    let app = TestApp::new().await;
    let token = app.demo_token().await;

    let (status, _) = app
        .request(Method::PATCH, "/users/me", Some(json!({ "locale": "fr" })), Some(&token))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_lists_users() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app.get("/users", Some(&admin)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_regular_user_cannot_list_users() {
    let app = TestApp::new().await;
    let token = app.register_user(&unique_email(), "geheim123").await;

    let (status, _) = app.get("/users", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
