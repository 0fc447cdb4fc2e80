//! # Prompt Optimizer
//!
//! Classifies a prompt, fills the category's rewrite template, and asks the
//! generation provider for the improved prompt in one non-streaming call.

use crate::{
    errors::GenerationError,
    intent::{classify_intent, IntentCategory},
    prompts::rewrite_prompt,
    providers::ai::GenerationProvider,
};
use serde::Serialize;
use tracing::info;

/// The result of a successful prompt rewrite.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedPrompt {
    pub original_prompt: String,
    pub intent: IntentCategory,
    pub optimized_prompt: String,
}

/// Rewrites a prompt for its classified intent.
///
/// Classification and template filling cannot fail; the only error source
/// is the upstream generation call, whose failure surfaces as the
/// provider's structured `GenerationError`.
pub async fn optimize_prompt(
    provider: &dyn GenerationProvider,
    prompt: &str,
) -> Result<OptimizedPrompt, GenerationError> {
    let intent = classify_intent(prompt);
    info!(intent = %intent, "Rewriting prompt");

    let full_prompt = rewrite_prompt(intent, prompt);
    let improved = provider.generate(&full_prompt).await?;

    Ok(OptimizedPrompt {
        original_prompt: prompt.to_string(),
        intent,
        optimized_prompt: improved,
    })
}
