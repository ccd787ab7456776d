//! Dictionary API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::TestApp;

/// App with a small Dutch and Indonesian word list
async fn dictionary_app() -> (TestApp, String) {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    for (word, lang, rank) in [
        ("huis", "nl", 1),
        ("huisje", "nl", 5),
        ("huiskamer", "nl", 3),
        ("rumah", "id", 2),
    ] {
        let (status, body) = app
            .post(
                "/dictionary",
                json!({ "word": word, "lang": lang, "rank": rank, "definition": null }),
                Some(&admin),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "add word failed: {}", body);
    }

    (app, admin)
}

fn words(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|w| w["word"].as_str().unwrap())
        .collect()
}

#[test_case("huis" ; "lower case")]
#[test_case("Huis" ; "capitalized")]
#[test_case("HUIS" ; "upper case")]
#[test_case("h%C3%BAis" ; "accented")]
#[tokio::test]
async fn test_exact_lookup_ignores_case_and_accents(query: &str) {
    let (app, token) = dictionary_app().await;

    let (status, body) = app
        .get(&format!("/dictionary/nl/{}?keyword=1", query), Some(&token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(words(&body), vec!["huis"]);
}

#[tokio::test]
async fn test_prefix_lookup_in_storage_order() {
    let (app, token) = dictionary_app().await;

    let (status, body) = app.get("/dictionary/nl/hui", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(words(&body), vec!["huis", "huisje", "huiskamer"]);
}

#[tokio::test]
async fn test_prefix_lookup_sorted_by_rank() {
    let (app, token) = dictionary_app().await;

    let (_, body) = app.get("/dictionary/nl/hui?sort=rank", Some(&token)).await;

    assert_eq!(words(&body), vec!["huisje", "huiskamer", "huis"]);
}

#[tokio::test]
async fn test_skip_and_limit_page_results() {
    let (app, token) = dictionary_app().await;

    let (_, first) = app.get("/dictionary/nl/hui?limit=2", Some(&token)).await;
    let (_, rest) = app.get("/dictionary/nl/hui?skip=2&limit=2", Some(&token)).await;

    assert_eq!(words(&first), vec!["huis", "huisje"]);
    assert_eq!(words(&rest), vec!["huiskamer"]);
}

#[tokio::test]
async fn test_lookup_is_scoped_to_language() {
    let (app, token) = dictionary_app().await;

    let (status, body) = app.get("/dictionary/id/huis", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_no_match_is_empty_list() {
    let (app, token) = dictionary_app().await;

    let (status, body) = app.get("/dictionary/id/kucing?keyword=1", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[test_case("/dictionary/nl/h", "word" ; "word too short")]
#[test_case("/dictionary/nl/%20%20", "word" ; "blank word")]
#[test_case("/dictionary/nl/%20h", "word" ; "one character after trimming")]
#[test_case("/dictionary/en/huis", "lang" ; "unsupported language")]
#[test_case("/dictionary/nl/huis?keyword=2", "keyword" ; "keyword out of range")]
#[test_case("/dictionary/nl/huis?limit=0", "limit" ; "limit too small")]
#[test_case("/dictionary/nl/huis?limit=101", "limit" ; "limit too large")]
#[test_case("/dictionary/nl/huis?skip=-1", "skip" ; "negative skip")]
#[test_case("/dictionary/nl/huis?sort=alpha", "sort" ; "unknown sort")]
#[tokio::test]
async fn test_invalid_lookup_is_rejected(uri: &str, field: &str) {
    let (app, token) = dictionary_app().await;

    let (status, body) = app.get(uri, Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], field);
}

#[tokio::test]
async fn test_non_numeric_query_is_bad_request() {
    let (app, token) = dictionary_app().await;

    let (status, _) = app.get("/dictionary/nl/huis?limit=veel", Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_requires_authentication() {
    let (app, _) = dictionary_app().await;

    let (status, _) = app.get("/dictionary/nl/huis", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_demo_may_look_up_words() {
    let (app, _) = dictionary_app().await;
    let demo = app.demo_token().await;

    let (status, body) = app.get("/dictionary/id/rum", Some(&demo)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(words(&body), vec!["rumah"]);
}

#[tokio::test]
async fn test_folded_duplicate_word_conflicts() {
    let (app, admin) = dictionary_app().await;

    let (status, _) = app
        .post("/dictionary", json!({ "word": "Húis", "lang": "nl" }), Some(&admin))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_same_word_in_other_language_is_allowed() {
    let (app, admin) = dictionary_app().await;

    let (status, body) = app
        .post("/dictionary", json!({ "word": "huis", "lang": "id" }), Some(&admin))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["lang"], "id");
    assert_eq!(body["keyword"], false);
}
