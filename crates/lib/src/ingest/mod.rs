//! # Document Ingestion
//!
//! Turns an uploaded file into embedded, retrievable chunks: extract text,
//! split it into overlapping chunks, embed each chunk, and store the result
//! in the document store.

pub mod pdf;
pub mod text;

pub use pdf::extract_text_from_pdf;
pub use text::chunk_text;

use crate::{
    errors::GenerationError,
    providers::{ai::generate_embedding, db::SqliteProvider, db::StoreError},
    types::EmbeddingConfig,
};
use thiserror::Error;
use tracing::info;

/// Errors from the ingestion pipeline.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Text content is empty or only whitespace")]
    EmptyContent,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("Failed to parse the file content: {0}")]
    Parse(String),
    #[error("Embedding generation failed: {0}")]
    Embedding(#[from] GenerationError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Extracts plain text from an uploaded file based on its extension.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, IngestError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "pdf" => extract_text_from_pdf(data),
        "txt" => {
            String::from_utf8(data.to_vec()).map_err(|e| IngestError::Parse(e.to_string()))
        }
        other => Err(IngestError::UnsupportedFileType(other.to_string())),
    }
}

/// Runs the full ingestion pipeline for one uploaded file.
///
/// Extracts text, chunks it, embeds every chunk, and stores the chunks
/// under the file's `documents` row. Returns the number of chunks indexed.
pub async fn ingest_document(
    store: &SqliteProvider,
    embedding: &EmbeddingConfig,
    file_name: &str,
    data: &[u8],
) -> Result<usize, IngestError> {
    info!(file_name, "Starting document ingestion");

    let raw_text = extract_text(file_name, data)?;
    let chunks = chunk_text(&raw_text)?;

    let document_id = store.upsert_document(file_name).await?;

    for (index, chunk) in chunks.iter().enumerate() {
        let vector = generate_embedding(
            &embedding.api_url,
            &embedding.model_name,
            chunk,
            embedding.api_key.as_deref(),
        )
        .await?;
        store
            .insert_chunk(document_id, index as i64, chunk, &vector)
            .await?;
    }

    info!(
        file_name,
        chunks = chunks.len(),
        "Document ingested and indexed"
    );
    Ok(chunks.len())
}
