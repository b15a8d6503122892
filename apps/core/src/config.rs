//! Analyzer configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::AppError;

/// Settings used to build an [`IntentAnalyzer`](crate::brain::IntentAnalyzer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// JSON knowledge base to load instead of the built-in catalogs.
    pub knowledge_base_path: Option<PathBuf>,
    /// Prompts longer than this many words get the small complexity bonus.
    pub long_prompt_words: usize,
    /// Prompts longer than this many words get the large complexity bonus.
    pub very_long_prompt_words: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            knowledge_base_path: None,
            long_prompt_words: 50,
            very_long_prompt_words: 100,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_knowledge_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.knowledge_base_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.very_long_prompt_words < self.long_prompt_words {
            return Err(AppError::Config(format!(
                "very_long_prompt_words ({}) must not be below long_prompt_words ({})",
                self.very_long_prompt_words, self.long_prompt_words
            )));
        }
        Ok(())
    }
}
