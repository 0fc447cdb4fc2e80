//! # Server Error Mapping
//!
//! Converts library errors into HTTP responses. Every error becomes a JSON
//! body of the shape `{"detail": "..."}`; internal errors are logged with
//! their original message but reported to the client generically.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use promptpal::{
    errors::GenerationError, ingest::IngestError, search::SearchError, StoreError,
};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
pub enum AppError {
    /// A request carried an unrecognized routing intent.
    InvalidIntent(String),
    /// A referenced resource (e.g. an interaction id) does not exist.
    NotFound(String),
    /// The generation or embeddings upstream failed.
    Generation(GenerationError),
    /// The storage layer failed.
    Store(StoreError),
    /// Document ingestion failed.
    Ingest(IngestError),
    /// Retrieval failed.
    Search(SearchError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                AppError::NotFound(format!("No interaction found with id {id}"))
            }
            other => AppError::Store(other),
        }
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::Ingest(err)
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Search(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            AppError::InvalidIntent(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Generation(err) => {
                error!("GenerationError: {:?}", err);
                match err {
                    GenerationError::Api { status, body } => (
                        StatusCode::BAD_GATEWAY,
                        format!("Generation API returned status {status}: {body}"),
                    ),
                    GenerationError::Request(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to the generation API failed: {e}"),
                    ),
                    other => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Generation failed: {other}"),
                    ),
                }
            }
            AppError::Store(err) => {
                error!("StoreError: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A storage error occurred.".to_string(),
                )
            }
            AppError::Ingest(err) => {
                error!("IngestError: {:?}", err);
                match err {
                    IngestError::EmptyContent => (
                        StatusCode::BAD_REQUEST,
                        "The uploaded document contains no text.".to_string(),
                    ),
                    IngestError::UnsupportedFileType(ext) => (
                        StatusCode::BAD_REQUEST,
                        format!("Unsupported file type: {ext}"),
                    ),
                    IngestError::Parse(msg) => (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to parse the file content: {msg}"),
                    ),
                    IngestError::Embedding(GenerationError::Api { status, body }) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Embeddings API returned status {status}: {body}"),
                    ),
                    other => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Document ingestion failed: {other}"),
                    ),
                }
            }
            AppError::Search(err) => {
                error!("SearchError: {:?}", err);
                match err {
                    SearchError::Embedding(GenerationError::Api { status, body }) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Embeddings API returned status {status}: {body}"),
                    ),
                    other => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Retrieval failed: {other}"),
                    ),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (status_code, body).into_response()
    }
}
