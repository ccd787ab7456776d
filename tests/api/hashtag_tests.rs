//! Hashtag API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

async fn tagged_app() -> TestApp {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    for (id, tags) in [
        ("les-1", json!(["#Huis", "grammatica"])),
        ("les-2", json!(["huis", "eten"])),
    ] {
        let (status, body) = app
            .put(
                &format!("/content/{}", id),
                json!({ "title": id, "body": "Tekst", "hashtags": tags }),
                Some(&admin),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "put content failed: {}", body);
    }

    app
}

#[tokio::test]
async fn test_index_groups_by_initial() {
    let app = tagged_app().await;

    let (status, body) = app.get("/hashtags", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "key": "e", "tags": [{ "name": "eten", "count": 1 }] },
            { "key": "g", "tags": [{ "name": "grammatica", "count": 1 }] },
            { "key": "h", "tags": [{ "name": "huis", "count": 2 }] },
        ])
    );
}

#[tokio::test]
async fn test_empty_index() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/hashtags", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_find_hashtag_ignores_hash_and_case() {
    let app = tagged_app().await;

    let (status, body) = app.get("/hashtags/%23HUIS", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "key": "h", "tags": [{ "name": "huis", "count": 2 }] }));
}

#[tokio::test]
async fn test_unknown_hashtag_is_not_found() {
    let app = tagged_app().await;

    let (status, _) = app.get("/hashtags/fiets", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_follows_content_updates() {
    let app = tagged_app().await;
    let admin = app.admin_token().await;

    app.put(
        "/content/les-2",
        json!({ "title": "Les 2", "body": "Nieuw", "hashtags": [] }),
        Some(&admin),
    )
    .await;

    let (_, body) = app.get("/hashtags/huis", None).await;
    assert_eq!(body["tags"][0]["count"], 1);

    let (status, _) = app.get("/hashtags/eten", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
