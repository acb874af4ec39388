//! Integration tests for the L'nui'suti HTTP API.
//!
//! Run with: `cargo test --package lnu-api --test api_integration`

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use lnu_api::{create_api_state, create_app};
use lnu_bridge::{LanguageData, Translator, FLUENT_SPEAKER_CAUTION};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Create a test router over the built-in seed.
fn create_test_router() -> Router {
    let data = LanguageData::seed().unwrap();
    create_app(create_api_state(Translator::new(Arc::new(data))))
}

/// Helper to make a GET request.
async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!(null));

    (status, json)
}

/// Helper to make a POST request with JSON body.
async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!(null));

    (status, json)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["entries"].as_u64().unwrap() > 0);
    assert!(json["data"]["morphemes"].as_u64().unwrap() > 0);
    assert!(json["timestamp"].is_u64());
}

// =============================================================================
// Word analysis
// =============================================================================

#[tokio::test]
async fn test_word_hit() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/word?q=Kesalul").await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["has_entry"], true);
    assert_eq!(data["source"], "lexicon");
    assert_eq!(data["result"]["matched_entry"]["headword"], "kesalul");
    assert_eq!(data["result"]["guessed_morphemes"], json!([]));
    assert_eq!(data["result"]["animacy_guess"], "animate");
}

#[tokio::test]
async fn test_word_miss() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/word?q=lnu%27jik").await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["has_entry"], false);
    assert_eq!(data["source"], "analysis");
    assert_eq!(data["result"]["matched_entry"], Value::Null);
    let morphemes = data["result"]["guessed_morphemes"].as_array().unwrap();
    assert_eq!(morphemes.len(), 2);
    assert_eq!(morphemes[0]["gloss"], "UNKNOWN-ROOT");
    assert_eq!(morphemes[1]["surface"], "jik");
}

#[tokio::test]
async fn test_word_blank_is_null() {
    let router = create_test_router();

    let (status, json) = get(&router, "/api/word?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], Value::Null);

    let (status, json) = get(&router, "/api/word").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], Value::Null);
}

// =============================================================================
// Sentence analysis
// =============================================================================

#[tokio::test]
async fn test_sentence() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/sentence?q=Kwe%27%2C%20teluisi%20Katew.").await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["tokens"], json!(["Kwe'", "teluisi", "Katew."]));
    let analyses = data["analyses"].as_array().unwrap();
    assert_eq!(analyses.len(), 3);
    assert!(analyses[0]["matched_entry"].is_object());
    assert!(analyses[2]["matched_entry"].is_null());
}

// =============================================================================
// Generation
// =============================================================================

#[tokio::test]
async fn test_generate_refrigerator() {
    let router = create_test_router();
    let body = json!({
        "concept": "refrigerator",
        "purpose": "keeps food and drink cold and safe",
        "domain_tags": ["home", "food"]
    });
    let (status, json) = post(&router, "/api/generate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["concept"], "refrigerator");
    let candidates = json["data"]["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["word"], "Mesentaqtekekim");
    assert_eq!(candidates[1]["word"], "Apoqnmatultimik");
    for candidate in candidates {
        assert!(candidate["caution"]
            .as_str()
            .unwrap()
            .starts_with(FLUENT_SPEAKER_CAUTION));
    }
}

#[tokio::test]
async fn test_generate_empty_body_still_answers() {
    let router = create_test_router();
    let (status, json) = post(&router, "/api/generate", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["concept"], "");
    let candidates = json["data"]["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 1);
}

// =============================================================================
// Dictionary
// =============================================================================

#[tokio::test]
async fn test_lookup_english() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/lookup?q=thank%20you&input_type=english").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["headword"], "wela'lin");
}

#[tokio::test]
async fn test_lookup_miss_is_null() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/lookup?q=hello&input_type=mikmaw").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn test_lookup_bad_input_type() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/lookup?q=kwe%27&input_type=french").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["data"]["code"], "INVALID_INPUT_TYPE");
}

#[tokio::test]
async fn test_lookup_orthography() {
    let router = create_test_router();

    let (status, json) = get(&router, "/api/lookup?q=gesalul").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["headword"], "kesalul");
    assert_eq!(json["data"]["sfo_spelling"], "kesalul");
    assert_eq!(json["data"]["lo_spelling"], Value::Null);

    let (status, json) = get(&router, "/api/lookup?q=kesalul&orth=LO").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["sfo_spelling"], Value::Null);
    assert_eq!(json["data"]["lo_spelling"], "gesalul");

    let (_, json) = get(&router, "/api/lookup?q=all%20my%20relations&orth=both").await;
    assert_eq!(json["data"]["sfo_spelling"], "msit no'kmaq");
    assert_eq!(json["data"]["lo_spelling"], "msit no'gmaq");
    assert!(json["data"]["two_eyed_seeing"].is_string());
}

#[tokio::test]
async fn test_lookup_bad_orthography() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/lookup?q=kesalul&orth=ipa").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["data"]["code"], "INVALID_ORTHOGRAPHY");
}

#[tokio::test]
async fn test_entries_in_order() {
    let router = create_test_router();
    let (status, json) = get(&router, "/api/entries").await;

    assert_eq!(status, StatusCode::OK);
    let headwords = json["data"].as_array().unwrap();
    assert_eq!(headwords[0], "kwe'");
    assert_eq!(headwords[1], "teluisi");
    assert!(headwords.contains(&json!("Tekekulqan")));
}
