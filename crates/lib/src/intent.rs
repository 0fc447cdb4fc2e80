//! # Intent Classification
//!
//! Maps a free-text prompt to a rewrite-template category using keyword
//! matching. The category only selects a rewrite template; it is distinct
//! from the routing intent carried on `/unified_chat` requests.

use serde::{Deserialize, Serialize};

/// The template-selection category for a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    DataAnalysis,
    EmailWriting,
    CodeDebugging,
    ResumeOptimization,
    General,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::DataAnalysis => "data_analysis",
            IntentCategory::EmailWriting => "email_writing",
            IntentCategory::CodeDebugging => "code_debugging",
            IntentCategory::ResumeOptimization => "resume_optimization",
            IntentCategory::General => "general",
        }
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The keyword rules, in priority order. The first category whose keyword
/// set matches wins; ordering is the only tie-breaker. Debugging outranks
/// email writing so that prompts like "debug this email" reach the
/// debugging template.
const INTENT_RULES: &[(IntentCategory, &[&str])] = &[
    (
        IntentCategory::DataAnalysis,
        &["analyze", "plot", "visualize", "data", "insight"],
    ),
    (
        IntentCategory::CodeDebugging,
        &["debug", "fix", "error", "bug", "issue"],
    ),
    (
        IntentCategory::EmailWriting,
        &["email", "write to", "compose", "reply"],
    ),
    (
        IntentCategory::ResumeOptimization,
        &["resume", "cv", "cover letter", "job application"],
    ),
];

/// Classifies a prompt into a rewrite category.
///
/// The input is lower-cased and each rule's keywords are tested as
/// substrings. Total: prompts matching no rule fall through to
/// `IntentCategory::General`.
pub fn classify_intent(prompt: &str) -> IntentCategory {
    let lowered = prompt.to_lowercase();
    for (category, keywords) in INTENT_RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *category;
        }
    }
    IntentCategory::General
}
