use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upper bound on brief length accepted from clients
pub const MAX_PROMPT_CHARS: usize = 2000;

/// A request to analyze a UI design brief.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PromptAnalysisRequest {
    /// The free-text design brief. Between 1 and 2000 characters.
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,
    /// Opaque client context, passed through untouched.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

impl PromptAnalysisRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            context: None,
        }
    }
}
