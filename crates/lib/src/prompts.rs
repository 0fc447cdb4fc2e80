//! # Rewrite Templates
//!
//! One fixed rewrite template per intent category. Each template carries a
//! single `{prompt}` placeholder that is substituted with the user's
//! original text before the filled template is sent to the generation
//! provider.

use crate::intent::IntentCategory;

pub const DATA_ANALYSIS_TEMPLATE: &str = r#"
You are a skilled data analyst.
Rewrite the following user prompt to be more precise and insightful for an LLM performing data analysis.

Original Prompt:
"{prompt}"

Improved Prompt:
"#;

pub const EMAIL_WRITING_TEMPLATE: &str = r#"
You are an expert email writer.
Rephrase the following prompt to make it concise, polite, and professional.

Original Prompt:
"{prompt}"

Improved Prompt:
"#;

pub const CODE_DEBUGGING_TEMPLATE: &str = r#"
You are a seasoned software engineer.
Reword the following prompt to clarify debugging intent and provide helpful context for better code support.

Original Prompt:
"{prompt}"

Improved Prompt:
"#;

pub const RESUME_OPTIMIZATION_TEMPLATE: &str = r#"
You are a resume expert.
Rewrite the following prompt to maximize impact, clarity, and professional tone for resume enhancement.

Original Prompt:
"{prompt}"

Improved Prompt:
"#;

pub const GENERAL_TEMPLATE: &str = r#"
You are a helpful AI assistant and expert in prompt engineering.
Rewrite the following user prompt to make it more clear, specific, and effective.

Original Prompt:
"{prompt}"

Improved Prompt:
"#;

/// Returns the rewrite template for a category.
pub fn rewrite_template(category: IntentCategory) -> &'static str {
    match category {
        IntentCategory::DataAnalysis => DATA_ANALYSIS_TEMPLATE,
        IntentCategory::EmailWriting => EMAIL_WRITING_TEMPLATE,
        IntentCategory::CodeDebugging => CODE_DEBUGGING_TEMPLATE,
        IntentCategory::ResumeOptimization => RESUME_OPTIMIZATION_TEMPLATE,
        IntentCategory::General => GENERAL_TEMPLATE,
    }
}

/// Fills the category's template with the user's prompt. Infallible.
pub fn rewrite_prompt(category: IntentCategory, prompt: &str) -> String {
    rewrite_template(category).replace("{prompt}", prompt)
}
