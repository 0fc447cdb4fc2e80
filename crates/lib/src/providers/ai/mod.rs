pub mod embedding;
pub mod ollama;

use crate::errors::GenerationError;
use async_trait::async_trait;
use dyn_clone::DynClone;
pub use embedding::generate_embedding;
pub use ollama::OllamaProvider;
use std::fmt::Debug;

/// A trait for text-generation backends.
///
/// Both methods send a fully formed prompt string and return the model's
/// completion. `generate` issues a single blocking request; `generate_streamed`
/// consumes the backend's incremental chunks and returns their concatenation.
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug + DynClone {
    /// Generates a completion in one request.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Generates a completion by accumulating incremental chunks.
    async fn generate_streamed(&self, prompt: &str) -> Result<String, GenerationError>;
}

dyn_clone::clone_trait_object!(GenerationProvider);
