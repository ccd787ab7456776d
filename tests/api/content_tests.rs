//! Content API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_put_then_get_content() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, stored) = app
        .put(
            "/content/about",
            json!({ "title": " Over TaalWiz ", "body": "Welkom", "hashtags": ["#Intro", "intro"] }),
            Some(&admin),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["hashtags"], json!(["intro"]));

    let (status, body) = app.get("/content/about", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Over TaalWiz");
    assert_eq!(body["body"], "Welkom");
}

#[tokio::test]
async fn test_put_replaces_existing_document() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    for title in ["Eerste", "Tweede"] {
        app.put("/content/about", json!({ "title": title, "body": "" }), Some(&admin))
            .await;
    }

    let (_, list) = app.get("/content", None).await;
    assert_eq!(list, json!([{ "id": "about", "title": "Tweede" }]));
}

#[tokio::test]
async fn test_missing_content_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/content/missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_put_requires_admin() {
    let app = TestApp::new().await;
    let demo = app.demo_token().await;
    let body = json!({ "title": "Hack", "body": "" });

    let (anonymous, _) = app.put("/content/about", body.clone(), None).await;
    let (as_demo, _) = app.put("/content/about", body, Some(&demo)).await;

    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(as_demo, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_put_rejects_blank_title() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .put("/content/about", json!({ "title": "   ", "body": "Welkom" }), Some(&admin))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "title");

    let (status, _) = app.get("/content/about", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_rejects_invalid_slug() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .put("/content/Not_A_Slug", json!({ "title": "x", "body": "" }), Some(&admin))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "id");
}

#[tokio::test]
async fn test_put_rejects_multi_word_hashtag() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .put(
            "/content/about",
            json!({ "title": "x", "body": "", "hashtags": ["twee woorden"] }),
            Some(&admin),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "hashtags");
}
