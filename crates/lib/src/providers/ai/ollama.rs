//! # Ollama Generation Provider
//!
//! Talks to an Ollama-compatible `/api/generate` endpoint. Supports the two
//! delivery modes the service uses: a single blocking request, and a
//! streaming request whose newline-delimited JSON fragments are accumulated
//! into one completion.

use crate::{errors::GenerationError, providers::ai::GenerationProvider};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::{debug, warn};

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct OllamaGenerateResponse {
    response: String,
}

/// One newline-delimited fragment of a streaming response. The `response`
/// field is optional because terminal fragments carry only status metadata.
#[derive(Deserialize, Debug)]
struct OllamaStreamFragment {
    #[serde(default)]
    response: Option<String>,
}

/// A provider for a local Ollama-compatible generation API.
#[derive(Clone, Debug)]
pub struct OllamaProvider {
    client: ReqwestClient,
    api_url: String,
    model: String,
}

impl OllamaProvider {
    /// Creates a new `OllamaProvider` for the given endpoint and model.
    pub fn new(api_url: String, model: String) -> Result<Self, GenerationError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(GenerationError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            model,
        })
    }

    async fn send(&self, prompt: &str, stream: bool) -> Result<reqwest::Response, GenerationError> {
        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await
            .map_err(GenerationError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl GenerationProvider for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.model, "--> Sending non-streaming generation request");
        let response = self.send(prompt, false).await?;

        let body: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(GenerationError::Deserialization)?;

        Ok(body.response.trim().to_string())
    }

    async fn generate_streamed(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.model, "--> Sending streaming generation request");
        let response = self.send(prompt, true).await?;

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut full_response = String::new();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(GenerationError::Stream)?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            // Fragments are newline-delimited JSON objects. The buffer may
            // end mid-fragment, so only complete lines are drained here.
            while let Some(newline_pos) = buffer.find('\n') {
                let line: String = buffer.drain(..=newline_pos).collect();
                append_fragment(line.trim(), &mut full_response);
            }
        }

        // Anything left in the buffer is a final, unterminated fragment.
        append_fragment(buffer.trim(), &mut full_response);

        Ok(full_response.trim().to_string())
    }
}

/// Parses one fragment line and appends its partial completion, if any.
/// Malformed fragments are logged and skipped; they never abort the stream.
fn append_fragment(line: &str, full_response: &mut String) {
    if line.is_empty() {
        return;
    }
    match serde_json::from_str::<OllamaStreamFragment>(line) {
        Ok(fragment) => {
            if let Some(partial) = fragment.response {
                full_response.push_str(&partial);
            }
        }
        Err(e) => {
            warn!("Skipping malformed stream fragment: {e}");
        }
    }
}
