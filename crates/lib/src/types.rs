use serde::{Deserialize, Serialize};

/// A single chunk returned by the retrieval layer.
///
/// `score` is the cosine distance reported by the vector search: lower
/// values mean a closer match. Chunks live only for the duration of the
/// request that retrieved them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub content: String,
    pub score: f64,
    pub metadata: ChunkMetadata,
}

/// Provenance for a retrieved chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// The uploaded file name the chunk came from.
    pub source: String,
    /// The position of the chunk within its source document.
    pub chunk_index: i64,
}

/// A full row from the `prompt_logs` table.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionRecord {
    pub id: i64,
    pub timestamp: String,
    pub intent: String,
    pub original_prompt: String,
    pub optimized_prompt: Option<String>,
    pub original_response: Option<String>,
    pub optimized_response: Option<String>,
    pub feedback: Option<String>,
}

/// Connection details for the embeddings endpoint.
///
/// Kept as one value so the ingestion and retrieval paths take the same
/// configuration without threading three strings everywhere.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_url: String,
    pub model_name: String,
    pub api_key: Option<String>,
}
