//! # PromptPal Core Library
//!
//! This crate provides the building blocks for the PromptPal service: intent
//! classification, prompt rewrite templates, a generation provider for local
//! Ollama-compatible models, an embeddings client, document ingestion and
//! chunking, SQLite-backed retrieval, and the persistent interaction log.

pub mod errors;
pub mod ingest;
pub mod intent;
pub mod optimizer;
pub mod prompts;
pub mod providers;
pub mod search;
pub mod types;

pub use errors::GenerationError;
pub use intent::{classify_intent, IntentCategory};
pub use optimizer::{optimize_prompt, OptimizedPrompt};
pub use providers::ai::{GenerationProvider, OllamaProvider};
pub use providers::db::{NewInteraction, SqliteProvider, StoreError};
pub use types::{EmbeddingConfig, InteractionRecord, RetrievedChunk};
