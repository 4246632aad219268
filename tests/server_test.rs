//! Integration tests for the HTTP service.
//!
//! Starts an in-process server on a random port backed by mock models and
//! talks to it with reqwest.
#![cfg(feature = "server")]

mod common;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use common::{MockClassifier, MockGenerator, MockLoader, summarizer, text_of_len};
use emosum::EMOTION_LABELS;
use emosum::server::{self, AppState};

/// Start a test server on a random port and return its base URL.
async fn start_test_server(loader: &Arc<MockLoader>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(summarizer(loader));

    tokio::spawn(async move {
        server::serve(listener, state).await.unwrap();
    });

    format!("http://{addr}")
}

fn default_loader() -> Arc<MockLoader> {
    Arc::new(MockLoader::new(
        MockClassifier::returning("LABEL_17", 0.93),
        MockGenerator::returning("A cheerful summary."),
    ))
}

#[tokio::test]
async fn health_reports_healthy() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;

    let response = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "healthy", "models_loaded": true}));
    assert_eq!(loader.classifier_loads(), 0, "health must not load models");
}

#[tokio::test]
async fn emotions_returns_all_28_labels_in_order() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;

    for _ in 0..2 {
        let body: Value = reqwest::get(format!("{base}/api/emotions"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({"emotions": EMOTION_LABELS}));
    }
}

#[tokio::test]
async fn summarize_returns_full_payload() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;
    let text = text_of_len(64);

    let response = reqwest::Client::new()
        .post(format!("{base}/api/summarize"))
        .json(&json!({"text": text, "max_length": 80}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["summary"], "A cheerful summary.");
    assert_eq!(body["detected_emotion"], "joy");
    assert!((body["emotion_confidence"].as_f64().unwrap() - 0.93).abs() < 1e-9);
    assert!(body["processing_time"].as_f64().unwrap() >= 0.0);
    assert_eq!(body["input_length"], 64);
    assert_eq!(body["summary_length"], 19);

    let requests = loader.generator.requests();
    assert_eq!(requests[0].0, format!("<joy>: {text}"));
    assert_eq!(requests[0].1.max_length, 80);
}

#[tokio::test]
async fn summarize_with_override_and_null_max_length() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/summarize"))
        .json(&json!({"text": text_of_len(50), "emotion_override": "gratitude", "max_length": null}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detected_emotion"], "gratitude");
    assert_eq!(body["emotion_confidence"], 1.0);
    assert_eq!(loader.classifier.calls(), 0);
    assert_eq!(loader.generator.requests()[0].1.max_length, 150);
}

#[tokio::test]
async fn summarize_accepts_null_override() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/summarize"))
        .json(&json!({"text": text_of_len(60), "emotion_override": null, "max_length": null}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detected_emotion"], "joy");
    assert_eq!(loader.classifier.calls(), 1);
    assert_eq!(loader.generator.requests()[0].1.max_length, 150);
}

#[tokio::test]
async fn unparseable_classifier_label_is_500() {
    let loader = Arc::new(MockLoader::new(
        MockClassifier::returning("LABEL_x", 0.42),
        MockGenerator::returning("unused"),
    ));
    let base = start_test_server(&loader).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/summarize"))
        .json(&json!({"text": text_of_len(60)}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "unexpected classifier label: LABEL_x"}));
}

#[tokio::test]
async fn short_text_is_400_regardless_of_other_fields() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;
    let client = reqwest::Client::new();

    for body in [
        json!({"text": text_of_len(49)}),
        json!({"text": text_of_len(49), "emotion_override": "joy"}),
        json!({"text": "", "max_length": 10, "emotion_override": "bogus"}),
    ] {
        let response = client
            .post(format!("{base}/api/summarize"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"detail": "Text too short"}));
    }

    assert_eq!(loader.classifier.calls(), 0);
    assert!(loader.generator.requests().is_empty());
}

#[tokio::test]
async fn model_failure_is_500_with_message() {
    let loader = Arc::new(MockLoader::new(
        MockClassifier::failing(),
        MockGenerator::returning("unused"),
    ));
    let base = start_test_server(&loader).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/summarize"))
        .json(&json!({"text": text_of_len(60)}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["detail"],
        "API error (500): classifier exploded"
    );
}

#[tokio::test]
async fn malformed_body_is_rejected_with_detail() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;
    let client = reqwest::Client::new();

    // Valid JSON, wrong shape
    let response = client
        .post(format!("{base}/api/summarize"))
        .json(&json!({"max_length": 10}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("text"));

    // Not JSON at all
    let response = client
        .post(format!("{base}/api/summarize"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_with_credentials() {
    let loader = default_loader();
    let base = start_test_server(&loader).await;

    let response = reqwest::Client::new()
        .request(Method::OPTIONS, format!("{base}/api/summarize"))
        .header("Origin", "https://app.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,x-custom")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://app.example.com"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(
        headers["access-control-allow-headers"],
        "content-type,x-custom"
    );
}
