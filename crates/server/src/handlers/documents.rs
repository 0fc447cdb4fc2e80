//! # Document Handlers
//!
//! Upload (multipart) and document Q&A (form) endpoints. Uploads run the
//! extract → chunk → embed → store pipeline; `/ask` retrieves the closest
//! chunks and answers with them as context.

use crate::{
    errors::AppError,
    state::AppState,
    types::{AskRequest, AskResponse, UploadResponse},
};
use axum::{
    extract::{Form, State},
    Json,
};
use axum_extra::extract::Multipart;
use promptpal::{
    ingest::ingest_document,
    search::{ask_prompt, build_context, retrieve_chunks},
};
use tracing::info;

/// How many chunks back a document answer.
const RAG_TOP_K: u32 = 3;

/// The handler for `POST /upload`.
pub async fn upload_handler(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::from)? {
        if field.name().unwrap_or("") == "file" {
            file_name = Some(field.file_name().unwrap_or("uploaded_file").to_string());
            file_data = Some(field.bytes().await.map_err(anyhow::Error::from)?.to_vec());
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::Internal(anyhow::anyhow!("File data not found in request.")))?;
    let file_name =
        file_name.ok_or_else(|| AppError::Internal(anyhow::anyhow!("File name not found in request.")))?;

    info!(file_name, bytes = file_data.len(), "Received upload");

    let chunks_indexed = ingest_document(
        &app_state.store,
        &app_state.embedding(),
        &file_name,
        &file_data,
    )
    .await?;

    Ok(Json(UploadResponse {
        status: "Document uploaded and indexed successfully".to_string(),
        chunks_indexed,
    }))
}

/// The handler for `POST /ask`.
pub async fn ask_handler(
    State(app_state): State<AppState>,
    Form(payload): Form<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    info!("Received question: {}", payload.question);

    let chunks = retrieve_chunks(
        &app_state.store,
        &app_state.embedding(),
        &payload.question,
        RAG_TOP_K,
    )
    .await?;

    let context = build_context(&chunks);
    let prompt = ask_prompt(&context, &payload.question);

    let answer = app_state.generator.generate_streamed(&prompt).await?;

    Ok(Json(AskResponse { answer }))
}
