//! # Retrieval
//!
//! Embeds a query, finds the closest document chunks, and assembles the
//! context block and combined prompt for retrieval-augmented generation.

use crate::{
    errors::GenerationError,
    providers::{ai::generate_embedding, db::SqliteProvider, db::StoreError},
    types::{ChunkMetadata, EmbeddingConfig, RetrievedChunk},
};
use thiserror::Error;
use tracing::debug;

/// Errors from the retrieval process.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Embedding generation failed: {0}")]
    Embedding(#[from] GenerationError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Retrieves the `k` chunks closest to the query.
///
/// Scores are cosine distances (lower = more similar) and the result is
/// ordered ascending, most similar first.
pub async fn retrieve_chunks(
    store: &SqliteProvider,
    embedding: &EmbeddingConfig,
    query: &str,
    k: u32,
) -> Result<Vec<RetrievedChunk>, SearchError> {
    let query_vector = generate_embedding(
        &embedding.api_url,
        &embedding.model_name,
        query,
        embedding.api_key.as_deref(),
    )
    .await?;

    let rows = store.vector_search(query_vector, k).await?;
    debug!(hits = rows.len(), "Vector search completed");

    Ok(rows
        .into_iter()
        .map(|row| RetrievedChunk {
            content: row.content,
            score: row.distance,
            metadata: ChunkMetadata {
                source: row.source,
                chunk_index: row.chunk_index,
            },
        })
        .collect())
}

/// Concatenates chunk contents into a context block with blank-line
/// separators. Empty for an empty chunk list.
pub fn build_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The combined context + question prompt used by the unified chat route.
pub fn combined_prompt(context: &str, question: &str) -> String {
    format!("Answer the question using the following context:\n{context}\n\nQuestion: {question}")
}

/// The combined context + question prompt used by the `/ask` route.
pub fn ask_prompt(context: &str, question: &str) -> String {
    format!(
        "Use the following context to answer the question.\n\nContext:\n{context}\n\nQuestion: {question}"
    )
}
