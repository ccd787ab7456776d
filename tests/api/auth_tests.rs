//! Authentication API Tests

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use taalwiz_server::domain::Role;
use taalwiz_server::shared::jwt::{self, JwtPayload};

use crate::common::{fake_name, unique_email, TestApp, ADMIN_EMAIL, ADMIN_PASSWORD};

fn registration(email: &str, password: &str, token: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": password,
        "name": fake_name(),
        "token": token,
        "locale": "nl",
    })
}

#[tokio::test]
async fn test_register_with_valid_invitation() {
    // Arrange
    let app = TestApp::new().await;
    let email = unique_email();
    let token = app.invite(None).await;

    // Act
    let (status, body) = app
        .post("/auth/register", registration(&email, "geheim123", &token), None)
        .await;

    // Assert
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], email.to_lowercase());
    assert_eq!(body["user"]["roles"], json!(["user"]));
    assert_eq!(body["user"]["locale"], "nl");
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["access_token"].as_str().is_some());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_with_duplicate_email_creates_nothing() {
    let app = TestApp::new().await;
    let token = app.invite(None).await;
    let users_before = app.users.count();

    let (status, _) = app
        .post("/auth/register", registration(ADMIN_EMAIL, "geheim123", &token), None)
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(app.users.count(), users_before);

    // The invitation was not consumed.
    let (status, _) = app
        .post("/auth/register", registration(&unique_email(), "geheim123", &token), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_with_short_password_fails_validation() {
    let app = TestApp::new().await;
    let token = app.invite(None).await;
    let users_before = app.users.count();

    let (status, body) = app
        .post("/auth/register", registration(&unique_email(), "12345", &token), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "password");
    assert_eq!(app.users.count(), users_before);
}

#[tokio::test]
async fn test_register_with_blank_name_fails_validation() {
    let app = TestApp::new().await;
    let token = app.invite(None).await;
    let users_before = app.users.count();
    let mut body = registration(&unique_email(), "geheim123", &token);
    body["name"] = json!("   ");

    let (status, body) = app.post("/auth/register", body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "name");
    assert_eq!(app.users.count(), users_before);
}

#[tokio::test]
async fn test_register_with_invalid_email_fails_validation() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/auth/register", registration("not-an-email", "geheim123", "abc"), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "email");
}

#[tokio::test]
async fn test_register_with_malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/auth/register", json!({ "email": "jan@example.nl" }), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn test_register_with_unknown_invitation_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/auth/register", registration(&unique_email(), "geheim123", "bogus"), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invitation_is_single_use() {
    let app = TestApp::new().await;
    let token = app.invite(None).await;

    let (first, _) = app
        .post("/auth/register", registration(&unique_email(), "geheim123", &token), None)
        .await;
    let (second, _) = app
        .post("/auth/register", registration(&unique_email(), "geheim123", &token), None)
        .await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bound_invitation_rejects_other_email() {
    let app = TestApp::new().await;
    let token = app.invite(Some("invited@example.nl")).await;

    let (status, _) = app
        .post("/auth/register", registration("other@example.nl", "geheim123", &token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post("/auth/register", registration("Invited@Example.nl", "geheim123", &token), None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_sign_in_token_carries_roles() {
    let app = TestApp::new().await;

    let token = app.sign_in(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let claims = jwt::verify(&app.settings.jwt, &token).unwrap();

    assert_eq!(claims.email, ADMIN_EMAIL);
    assert_eq!(claims.roles, vec![Role::Admin, Role::User]);
    assert_eq!(claims.iss, "taalwiz");
    assert_eq!(claims.aud, "taalwiz-app");
}

#[tokio::test]
async fn test_sign_in_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/auth/sign-in", json!({ "email": ADMIN_EMAIL, "password": "wrong-password" }), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sign_in_with_unknown_email_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/auth/sign-in", json!({ "email": unique_email(), "password": "geheim123" }), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/users/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = TestApp::new().await;
    let payload = JwtPayload::new(
        &app.settings.jwt,
        1,
        ADMIN_EMAIL,
        &[Role::Admin],
        Utc::now() - Duration::hours(2),
    );
    let token = jwt::sign(&app.settings.jwt, &payload).unwrap();

    let (status, _) = app.get("/users/me", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = TestApp::new().await;
    let mut settings = app.settings.jwt.clone();
    settings.secret = "another-secret-that-is-long-enough-000".into();
    let payload = JwtPayload::new(&settings, 1, ADMIN_EMAIL, &[Role::Admin], Utc::now());
    let token = jwt::sign(&settings, &payload).unwrap();

    let (status, _) = app.get("/users", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_demo_is_forbidden_on_admin_routes() {
    let app = TestApp::new().await;
    let demo = app.demo_token().await;

    let (invite, _) = app.post("/auth/invitations", json!({}), Some(&demo)).await;
    let (users, _) = app.get("/users", Some(&demo)).await;
    let (word, _) = app
        .post("/dictionary", json!({ "word": "huis", "lang": "nl" }), Some(&demo))
        .await;

    assert_eq!(invite, StatusCode::FORBIDDEN);
    assert_eq!(users, StatusCode::FORBIDDEN);
    assert_eq!(word, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await;
    let email = unique_email();
    let token = app.register_user(&email, "geheim123").await;

    let (status, _) = app
        .post(
            "/auth/change-password",
            json!({ "current_password": "verkeerd", "new_password": "nieuw-geheim" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post(
            "/auth/change-password",
            json!({ "current_password": "geheim123", "new_password": "nieuw-geheim" }),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (old, _) = app
        .post("/auth/sign-in", json!({ "email": email, "password": "geheim123" }), None)
        .await;
    assert_eq!(old, StatusCode::UNAUTHORIZED);
    app.sign_in(&email, "nieuw-geheim").await;
}

#[tokio::test]
async fn test_change_password_rejects_short_new_password() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/auth/change-password",
            json!({ "current_password": ADMIN_PASSWORD, "new_password": "kort" }),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "new_password");
}

#[tokio::test]
async fn test_reset_password_token_is_single_use() {
    let app = TestApp::new().await;
    let email = unique_email();
    app.register_user(&email, "geheim123").await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .post("/auth/reset-tokens", json!({ "email": email }), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let reset_token = body["token"].as_str().unwrap().to_string();

    let reset = json!({ "email": email, "token": reset_token, "password": "hersteld-1" });
    let (first, _) = app.post("/auth/reset-password", reset.clone(), None).await;
    assert_eq!(first, StatusCode::NO_CONTENT);
    app.sign_in(&email, "hersteld-1").await;

    let (second, _) = app.post("/auth/reset-password", reset, None).await;
    assert_eq!(second, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_token_is_bound_to_its_user() {
    let app = TestApp::new().await;
    let email = unique_email();
    app.register_user(&email, "geheim123").await;
    let admin = app.admin_token().await;

    let (_, body) = app
        .post("/auth/reset-tokens", json!({ "email": email }), Some(&admin))
        .await;
    let reset_token = body["token"].as_str().unwrap();

    let (status, _) = app
        .post(
            "/auth/reset-password",
            json!({ "email": ADMIN_EMAIL, "token": reset_token, "password": "overname-1" }),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_token_for_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app
        .post("/auth/reset-tokens", json!({ "email": unique_email() }), Some(&admin))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test_case("/auth/sign-in", json!({ "email": ADMIN_EMAIL, "password": "12345" }) ; "sign in")]
#[test_case(
    "/auth/reset-password",
    json!({ "email": ADMIN_EMAIL, "token": "abc", "password": "12345" })
    ; "reset password"
)]
#[tokio::test]
async fn test_short_password_fails_validation(uri: &str, request: serde_json::Value) {
    let app = TestApp::new().await;

    let (status, body) = app.post(uri, request, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "password");
}

#[tokio::test]
async fn test_short_reset_password_leaves_token_usable() {
    let app = TestApp::new().await;
    let email = unique_email();
    app.register_user(&email, "geheim123").await;
    let admin = app.admin_token().await;

    let (_, body) = app
        .post("/auth/reset-tokens", json!({ "email": email }), Some(&admin))
        .await;
    let reset_token = body["token"].as_str().unwrap().to_string();

    let (status, _) = app
        .post(
            "/auth/reset-password",
            json!({ "email": email, "token": reset_token, "password": "12345" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    app.sign_in(&email, "geheim123").await;

    let (status, _) = app
        .post(
            "/auth/reset-password",
            json!({ "email": email, "token": reset_token, "password": "hersteld-1" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    app.sign_in(&email, "hersteld-1").await;
}
