//! Confidence scoring: how much signal the classifier found in a prompt.

use super::entities::ExtractedEntities;
use super::knowledge_base::KnowledgeBase;

const BASE: f32 = 0.5;
const PAGE_TYPE_BONUS: f32 = 0.3;
const STYLE_BONUS: f32 = 0.2;
const DOMAIN_BONUS: f32 = 0.1;
const WORDS_BONUS: f32 = 0.1;
const INTENT_VERB_BONUS: f32 = 0.1;

/// Word-count tiers. Unlike complexity, both tiers can apply.
const DETAILED_PROMPT_WORDS: usize = 10;
const VERY_DETAILED_PROMPT_WORDS: usize = 25;

#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        kb: &KnowledgeBase,
        entities: &ExtractedEntities,
        prompt_lower: &str,
        word_count: usize,
    ) -> f32 {
        let mut confidence = BASE;

        if entities.has_page_type() {
            confidence += PAGE_TYPE_BONUS;
        }
        if entities.has_style() {
            confidence += STYLE_BONUS;
        }
        if entities.has_domain() {
            confidence += DOMAIN_BONUS;
        }

        if word_count > DETAILED_PROMPT_WORDS {
            confidence += WORDS_BONUS;
        }
        if word_count > VERY_DETAILED_PROMPT_WORDS {
            confidence += WORDS_BONUS;
        }

        if kb
            .intent_verbs
            .iter()
            .any(|verb| prompt_lower.contains(verb.as_str()))
        {
            confidence += INTENT_VERB_BONUS;
        }

        confidence.min(1.0)
    }
}
