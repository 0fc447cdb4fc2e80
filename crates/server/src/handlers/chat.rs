//! # Unified Chat Handlers
//!
//! The unified routing endpoint and its companion feedback endpoint. One
//! request exercises exactly one of three behaviors (direct chat, prompt
//! rewriting, or document Q&A), and every validated request appends exactly
//! one row to the interaction log, whether or not its branch succeeded.

use crate::{
    errors::AppError,
    state::AppState,
    types::{ChatRequest, FeedbackRequest, FeedbackResponse, ResponseEnvelope},
};
use axum::{extract::State, Json};
use promptpal::{
    optimize_prompt,
    search::{build_context, combined_prompt, retrieve_chunks},
    NewInteraction,
};
use tracing::{info, warn};

/// How many chunks back a document answer.
const RAG_TOP_K: u32 = 3;

/// The handler for `POST /unified_chat`.
pub async fn unified_chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    info!(intent = %payload.intent, "Received unified chat request");

    // Intent validation happens before anything else; a rejected request
    // writes no log row.
    if !matches!(
        payload.intent.as_str(),
        "prompt_improvement" | "ask_doc" | "general_chat"
    ) {
        return Err(AppError::InvalidIntent(format!(
            "Invalid intent: {}",
            payload.intent
        )));
    }

    let mut log_entry = NewInteraction {
        intent: payload.intent.clone(),
        original_prompt: payload.prompt.clone(),
        ..Default::default()
    };

    let outcome = route_intent(&app_state, &payload, &mut log_entry).await;

    // The log attempt is unconditional once routing begins: a failed branch
    // still records whatever it gathered before the error.
    if outcome.is_err() {
        warn!(intent = %payload.intent, "Routing failed; logging the partial interaction");
    }
    let log_result = app_state.store.append_interaction(log_entry).await;

    let envelope = outcome?;
    log_result?;

    Ok(Json(envelope))
}

/// Runs one routing branch, filling `log_entry` as fields become known.
async fn route_intent(
    app_state: &AppState,
    payload: &ChatRequest,
    log_entry: &mut NewInteraction,
) -> Result<ResponseEnvelope, AppError> {
    let prompt = &payload.prompt;

    match payload.intent.as_str() {
        "prompt_improvement" => {
            let optimized = optimize_prompt(app_state.generator.as_ref(), prompt).await?;
            log_entry.optimized_prompt = Some(optimized.optimized_prompt.clone());

            // Both responses are produced for comparison in the log; only
            // the optimized one is returned to the caller.
            let original_response = app_state.generator.generate_streamed(prompt).await?;
            log_entry.original_response = Some(original_response);

            let optimized_response = app_state
                .generator
                .generate_streamed(&optimized.optimized_prompt)
                .await?;
            log_entry.optimized_response = Some(optimized_response.clone());

            Ok(ResponseEnvelope {
                original_prompt: prompt.clone(),
                optimized_prompt: Some(optimized.optimized_prompt),
                optimized_response: Some(optimized_response),
                sources: Vec::new(),
                feedback: None,
            })
        }
        "ask_doc" => {
            let mut sources =
                retrieve_chunks(&app_state.store, &app_state.embedding(), prompt, RAG_TOP_K)
                    .await?;
            // Scores are cosine distances; ascending order keeps the most
            // similar chunks first.
            sources.sort_by(|a, b| a.score.total_cmp(&b.score));
            sources.truncate(RAG_TOP_K as usize);

            let context = build_context(&sources);
            let question_prompt = combined_prompt(&context, prompt);
            log_entry.optimized_prompt = Some(question_prompt.clone());

            let answer = app_state
                .generator
                .generate_streamed(&question_prompt)
                .await?;
            log_entry.optimized_response = Some(answer.clone());

            Ok(ResponseEnvelope {
                original_prompt: prompt.clone(),
                optimized_prompt: Some(question_prompt),
                optimized_response: Some(answer),
                sources,
                feedback: None,
            })
        }
        "general_chat" => {
            let response = app_state.generator.generate_streamed(prompt).await?;
            log_entry.optimized_response = Some(response.clone());

            Ok(ResponseEnvelope {
                original_prompt: prompt.clone(),
                optimized_prompt: None,
                optimized_response: Some(response),
                sources: Vec::new(),
                feedback: None,
            })
        }
        // Already validated by the caller.
        other => Err(AppError::InvalidIntent(format!("Invalid intent: {other}"))),
    }
}

/// The handler for `POST /submit_feedback`.
///
/// Feedback against an id that was never logged is a 404, not a silent
/// no-op.
pub async fn submit_feedback_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    app_state
        .store
        .set_feedback(payload.prompt_id, &payload.feedback)
        .await?;

    Ok(Json(FeedbackResponse {
        message: "Feedback submitted successfully.".to_string(),
    }))
}
