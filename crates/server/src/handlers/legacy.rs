//! # Legacy Endpoints
//!
//! The original single-purpose endpoints, kept alongside the unified
//! router: direct chat, prompt rewriting, rewrite-and-compare, and the
//! first-generation feedback route. They duplicate subsets of the unified
//! flow directly rather than calling through it.

use crate::{
    errors::AppError,
    state::AppState,
    types::{
        ChatResponse, ComparisonResponse, FeedbackRequest, FeedbackResponse,
        OptimizedPromptResponse, PromptInput,
    },
};
use axum::{extract::State, Json};
use promptpal::{optimize_prompt, NewInteraction};
use tracing::info;

/// The handler for `POST /chat`: one non-streaming generation call on the
/// raw prompt. Not logged, mirroring the original behavior.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<PromptInput>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = app_state.generator.generate(&payload.prompt).await?;
    Ok(Json(ChatResponse { response }))
}

/// The handler for `POST /optimize_prompt`: rewrite only, no responses.
pub async fn optimize_prompt_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<PromptInput>,
) -> Result<Json<OptimizedPromptResponse>, AppError> {
    let optimized = optimize_prompt(app_state.generator.as_ref(), &payload.prompt).await?;

    app_state
        .store
        .append_interaction(NewInteraction {
            intent: optimized.intent.to_string(),
            original_prompt: payload.prompt.clone(),
            optimized_prompt: Some(optimized.optimized_prompt.clone()),
            ..Default::default()
        })
        .await?;

    Ok(Json(OptimizedPromptResponse {
        original_prompt: optimized.original_prompt,
        intent: optimized.intent.to_string(),
        optimized_prompt: optimized.optimized_prompt,
    }))
}

/// The handler for `POST /optimize_and_compare`: rewrite the prompt, then
/// generate responses for both the original and the rewrite.
pub async fn optimize_and_compare_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<PromptInput>,
) -> Result<Json<ComparisonResponse>, AppError> {
    let optimized = optimize_prompt(app_state.generator.as_ref(), &payload.prompt).await?;

    let original_response = app_state
        .generator
        .generate_streamed(&payload.prompt)
        .await?;
    let optimized_response = app_state
        .generator
        .generate_streamed(&optimized.optimized_prompt)
        .await?;

    app_state
        .store
        .append_interaction(NewInteraction {
            intent: optimized.intent.to_string(),
            original_prompt: payload.prompt.clone(),
            optimized_prompt: Some(optimized.optimized_prompt.clone()),
            original_response: Some(original_response.clone()),
            optimized_response: Some(optimized_response.clone()),
        })
        .await?;

    Ok(Json(ComparisonResponse {
        original_prompt: payload.prompt,
        optimized_prompt: optimized.optimized_prompt,
        original_response,
        optimized_response,
        intent: optimized.intent.to_string(),
    }))
}

/// The handler for the legacy `POST /feedback` route.
pub async fn feedback_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    info!(prompt_id = payload.prompt_id, "Received feedback");
    app_state
        .store
        .set_feedback(payload.prompt_id, &payload.feedback)
        .await?;

    Ok(Json(FeedbackResponse {
        message: format!("Feedback saved for prompt ID {}", payload.prompt_id),
    }))
}
