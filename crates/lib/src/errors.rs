use thiserror::Error;

/// Errors from the generation and embeddings providers.
///
/// Upstream failures are always represented structurally. In particular, a
/// non-2xx status from the model server is `Api { status, body }` so that
/// callers can never mistake an upstream error page for a real completion.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the generation API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize generation API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Generation API returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Failed to read the response stream: {0}")]
    Stream(reqwest::Error),
    #[error("Embeddings API returned no embedding data")]
    EmptyEmbedding,
}
