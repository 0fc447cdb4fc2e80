//! # Ollama Provider Tests
//!
//! Verifies both delivery modes of the generation client against a mock
//! `/api/generate` endpoint: single-response extraction, structured error
//! reporting on non-2xx statuses, and NDJSON stream accumulation with
//! malformed fragments skipped.

mod common;

use common::setup_tracing;
use promptpal::{GenerationError, GenerationProvider, OllamaProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OllamaProvider {
    OllamaProvider::new(format!("{}/api/generate", server.uri()), "mistral".to_string())
        .expect("Failed to create OllamaProvider")
}

#[tokio::test]
async fn test_generate_extracts_and_trims_response() {
    setup_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "mistral", "stream": false})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"response": "  42  ", "done": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate("What is 6 times 7?").await.unwrap();

    assert_eq!(result, "42");
}

#[tokio::test]
async fn test_generate_reports_upstream_failure_structurally() {
    setup_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.generate("hello").await.unwrap_err();

    // The failure must be a tagged error carrying status and body, never a
    // string that could pass for a completion.
    match err {
        GenerationError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model not loaded");
        }
        other => panic!("Expected GenerationError::Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_streamed_accumulates_fragments() {
    setup_tracing();
    let server = MockServer::start().await;

    let ndjson = concat!(
        "{\"response\": \"The answer\", \"done\": false}\n",
        "{\"response\": \" is\", \"done\": false}\n",
        "{\"response\": \" 4.\", \"done\": false}\n",
        "{\"done\": true}\n",
    );

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"stream": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ndjson, "application/x-ndjson"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate_streamed("What is 2+2?").await.unwrap();

    assert_eq!(result, "The answer is 4.");
}

#[tokio::test]
async fn test_generate_streamed_skips_malformed_fragments() {
    setup_tracing();
    let server = MockServer::start().await;

    let ndjson = concat!(
        "{\"response\": \"Hello\", \"done\": false}\n",
        "this line is not json\n",
        "{\"response\": \", world\", \"done\": false}\n",
    );

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(ndjson, "application/x-ndjson"),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate_streamed("greet").await.unwrap();

    assert_eq!(result, "Hello, world");
}
