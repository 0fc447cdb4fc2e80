//! # API Types
//!
//! The request and response payloads for all endpoints.

use promptpal::types::RetrievedChunk;
use serde::{Deserialize, Serialize};

/// The body of `/unified_chat`.
///
/// `intent` stays a plain string so that unrecognized values are rejected by
/// the router as a 400 rather than failing JSON extraction.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub intent: String,
}

/// The uniform response envelope of `/unified_chat`.
///
/// `feedback` is always null at creation; it is annotated later through the
/// feedback endpoints, keyed by the logged interaction id.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub original_prompt: String,
    pub optimized_prompt: Option<String>,
    pub optimized_response: Option<String>,
    pub sources: Vec<RetrievedChunk>,
    pub feedback: Option<String>,
}

/// The body of `/submit_feedback` and the legacy `/feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub prompt_id: i64,
    /// e.g. "up", "down", "5 stars"
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
}

/// The body of the legacy single-prompt endpoints.
#[derive(Debug, Deserialize)]
pub struct PromptInput {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizedPromptResponse {
    pub original_prompt: String,
    pub intent: String,
    pub optimized_prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub original_response: String,
    pub optimized_response: String,
    pub intent: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub chunks_indexed: usize,
}

/// The form body of `/ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
