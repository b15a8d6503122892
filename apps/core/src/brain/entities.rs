//! Prompt normalization and entity extraction.
//!
//! Matching is plain substring containment against the lowercased prompt, so
//! multi-word keywords ("sign in", "get in touch") work without tokenization.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::knowledge_base::KnowledgeBase;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex: non-word pattern"));

/// Tokens shorter than this are discarded
const MIN_TOKEN_LEN: usize = 3;

/// Lowercase, strip punctuation and drop tokens of two characters or less.
pub fn tokenize(prompt: &str) -> Vec<String> {
    let lowered = prompt.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(|t| t.to_string())
        .collect()
}

/// Whitespace-delimited word count of the raw prompt
pub fn word_count(prompt: &str) -> usize {
    prompt.split_whitespace().count()
}

/// Catalog keys detected in a prompt, each list in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub page_types: Vec<String>,
    pub styles: Vec<String>,
    pub domains: Vec<String>,
    pub functional: Vec<String>,
    pub technical: Vec<String>,
    pub ui_element_groups: Vec<String>,
}

/// Names of every entry with at least one keyword contained in `text`
fn detect<'a, I>(entries: I, text: &str) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a [String])>,
{
    entries
        .into_iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
        .map(|(name, _)| name.to_string())
        .collect()
}

impl ExtractedEntities {
    /// Scan every catalog of `kb` against an already lowercased prompt.
    pub fn extract(kb: &KnowledgeBase, prompt_lower: &str) -> Self {
        Self {
            page_types: detect(
                kb.page_types.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())),
                prompt_lower,
            ),
            styles: detect(
                kb.styles.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())),
                prompt_lower,
            ),
            domains: detect(
                kb.domains.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())),
                prompt_lower,
            ),
            functional: detect(
                kb.functional.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())),
                prompt_lower,
            ),
            technical: detect(
                kb.technical.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())),
                prompt_lower,
            ),
            ui_element_groups: detect(
                kb.ui_element_groups
                    .iter()
                    .map(|e| (e.name.as_str(), e.keywords.as_slice())),
                prompt_lower,
            ),
        }
    }

    /// First audience whose keywords appear in the prompt
    pub fn detect_audience(kb: &KnowledgeBase, prompt_lower: &str) -> Option<String> {
        detect(
            kb.audiences.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())),
            prompt_lower,
        )
        .into_iter()
        .next()
    }

    pub fn has_page_type(&self) -> bool {
        !self.page_types.is_empty()
    }

    pub fn has_style(&self) -> bool {
        !self.styles.is_empty()
    }

    pub fn has_domain(&self) -> bool {
        !self.domains.is_empty()
    }
}
