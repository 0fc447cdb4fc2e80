#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the library integration tests: tracing setup and a
//! scripted mock generation provider.

use async_trait::async_trait;
use promptpal::{GenerationError, GenerationProvider};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once for the test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

/// A mock generation provider that replays canned responses and records the
/// prompts it was called with.
#[derive(Clone, Debug)]
pub struct MockGenerationProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockGenerationProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    fn next_response(&self, prompt: &str) -> String {
        self.call_history
            .write()
            .unwrap()
            .push(prompt.to_string());
        self.responses
            .write()
            .unwrap()
            .pop()
            .unwrap_or_else(|| "Default mock response".to_string())
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        Ok(self.next_response(prompt))
    }

    async fn generate_streamed(&self, prompt: &str) -> Result<String, GenerationError> {
        Ok(self.next_response(prompt))
    }
}
