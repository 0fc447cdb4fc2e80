//! # SQLite Provider Tests
//!
//! Exercises the interaction log and the document store against isolated
//! in-memory databases: append/read-back, the feedback rows-affected check,
//! and upload-replaces-prior-chunks semantics.

mod common;

use common::setup_tracing;
use promptpal::{NewInteraction, SqliteProvider, StoreError};

async fn fresh_provider() -> SqliteProvider {
    let provider = SqliteProvider::new(":memory:")
        .await
        .expect("Failed to create SqliteProvider");
    provider
        .initialize_schema()
        .await
        .expect("Failed to initialize schema");
    provider
}

#[tokio::test]
async fn test_append_and_read_back_interaction() {
    setup_tracing();
    let provider = fresh_provider().await;

    let id = provider
        .append_interaction(NewInteraction {
            intent: "general_chat".to_string(),
            original_prompt: "What is 2+2?".to_string(),
            optimized_prompt: None,
            original_response: None,
            optimized_response: Some("4".to_string()),
        })
        .await
        .unwrap();

    assert!(id > 0);

    let record = provider.get_interaction(id).await.unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.intent, "general_chat");
    assert_eq!(record.original_prompt, "What is 2+2?");
    assert_eq!(record.optimized_prompt, None);
    assert_eq!(record.optimized_response.as_deref(), Some("4"));
    assert_eq!(record.feedback, None);
    // Timestamp is assigned at insert, as RFC 3339.
    assert!(record.timestamp.contains('T'));
}

#[tokio::test]
async fn test_feedback_update_and_read_back() {
    setup_tracing();
    let provider = fresh_provider().await;

    let id = provider
        .append_interaction(NewInteraction {
            intent: "prompt_improvement".to_string(),
            original_prompt: "fix my bug".to_string(),
            optimized_prompt: Some("Please fix the bug in my code".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    provider.set_feedback(id, "up").await.unwrap();

    let record = provider.get_interaction(id).await.unwrap();
    assert_eq!(record.feedback.as_deref(), Some("up"));
}

#[tokio::test]
async fn test_feedback_on_unknown_id_is_not_found() {
    setup_tracing();
    let provider = fresh_provider().await;

    let err = provider.set_feedback(9999, "down").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(9999)));

    // Nothing was written along the way.
    assert_eq!(provider.count_interactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reupload_replaces_chunks() {
    setup_tracing();
    let provider = fresh_provider().await;

    let doc_id = provider.upsert_document("notes.txt").await.unwrap();
    provider
        .insert_chunk(doc_id, 0, "old contents", &[1.0, 0.0])
        .await
        .unwrap();
    provider
        .insert_chunk(doc_id, 1, "more old contents", &[0.0, 1.0])
        .await
        .unwrap();

    // Re-uploading the same source keeps the document row but drops its
    // previous chunks.
    let same_id = provider.upsert_document("notes.txt").await.unwrap();
    assert_eq!(same_id, doc_id);
    provider
        .insert_chunk(same_id, 0, "new contents", &[1.0, 0.0])
        .await
        .unwrap();

    let hits = provider.vector_search(vec![1.0, 0.0], 10).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].content, "new contents");
    assert_eq!(hits[0].source, "notes.txt");
}

#[tokio::test]
async fn test_vector_search_ranks_by_ascending_distance() {
    setup_tracing();
    let provider = fresh_provider().await;

    let doc_id = provider.upsert_document("facts.txt").await.unwrap();
    provider
        .insert_chunk(doc_id, 0, "close match", &[1.0, 0.0, 0.0])
        .await
        .unwrap();
    provider
        .insert_chunk(doc_id, 1, "far match", &[0.0, 1.0, 0.0])
        .await
        .unwrap();

    let hits = provider
        .vector_search(vec![1.0, 0.1, 0.0], 2)
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].content, "close match");
    assert!(hits[0].distance <= hits[1].distance);
}

#[tokio::test]
async fn test_search_on_empty_index_returns_nothing() {
    setup_tracing();
    let provider = fresh_provider().await;

    let hits = provider.vector_search(vec![1.0, 0.0], 3).await.unwrap();
    assert!(hits.is_empty());
}
