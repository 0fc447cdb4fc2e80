//! # Document Upload and Q&A Tests
//!
//! Covers the `/upload` → `/ask` flow: multipart ingestion of a text file,
//! retrieval-backed answering, and rejection of unsupported file types.

mod common;

use anyhow::Result;
use common::TestApp;
use httpmock::Method;
use serde_json::json;

#[tokio::test]
async fn test_upload_then_ask_uses_document_context() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embeddings_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST).path("/v1/embeddings");
        then.status(200)
            .json_body(json!({"data": [{"embedding": [0.5, 0.5, 0.5]}]}));
    });

    // --- Upload a small text document ---
    let file_part = reqwest::multipart::Part::bytes(
        b"The vacation policy grants 25 days per year.\n\nUnused days expire in March.".to_vec(),
    )
    .file_name("policy.txt");
    let form = reqwest::multipart::Form::new().part("file", file_part);

    let upload_res = app
        .client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await?;
    assert!(upload_res.status().is_success());

    let upload_body: serde_json::Value = upload_res.json().await?;
    assert_eq!(
        upload_body["status"],
        "Document uploaded and indexed successfully"
    );
    // Two paragraphs become two chunks, each embedded once.
    assert_eq!(upload_body["chunks_indexed"], 2);
    embeddings_mock.assert_hits(2);

    // --- Ask a question against the indexed document ---
    let generation_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/generate")
            .body_contains("The vacation policy grants 25 days per year.");
        then.status(200)
            .header("Content-Type", "application/x-ndjson")
            .body("{\"response\": \"25 days per year.\", \"done\": false}\n{\"done\": true}\n");
    });

    let ask_res = app
        .client
        .post(format!("{}/ask", app.address))
        .form(&[("question", "How many vacation days do I get?")])
        .send()
        .await?;
    assert!(ask_res.status().is_success());
    generation_mock.assert();

    let ask_body: serde_json::Value = ask_res.json().await?;
    assert_eq!(ask_body["answer"], "25 days per year.");

    Ok(())
}

#[tokio::test]
async fn test_upload_rejects_unsupported_file_types() -> Result<()> {
    let app = TestApp::spawn().await?;

    let file_part =
        reqwest::multipart::Part::bytes(b"binary".to_vec()).file_name("archive.zip");
    let form = reqwest::multipart::Form::new().part("file", file_part);

    let response = app
        .client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await?;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("Unsupported file type: zip"));

    Ok(())
}

#[tokio::test]
async fn test_ask_with_empty_index_still_answers() -> Result<()> {
    let app = TestApp::spawn().await?;

    let embeddings_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST).path("/v1/embeddings");
        then.status(200)
            .json_body(json!({"data": [{"embedding": [0.1, 0.2, 0.3]}]}));
    });
    let generation_mock = app.mock_server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/generate")
            .body_contains("Question: Is anything indexed?");
        then.status(200)
            .header("Content-Type", "application/x-ndjson")
            .body("{\"response\": \"No documents available.\", \"done\": false}\n{\"done\": true}\n");
    });

    let response = app
        .client
        .post(format!("{}/ask", app.address))
        .form(&[("question", "Is anything indexed?")])
        .send()
        .await?;
    assert!(response.status().is_success());
    embeddings_mock.assert();
    generation_mock.assert();

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["answer"], "No documents available.");

    Ok(())
}
