//! Design complexity scoring.
//!
//! Additive heuristic over the resolved intent: page type base, style weights,
//! component count, requirement counts and prompt length. Capped at 1.0.

use super::intent::DesignIntent;
use super::knowledge_base::KnowledgeBase;

/// Base used when the page type has no catalog entry
const UNKNOWN_PAGE_BASE: f32 = 0.5;
const STYLE_FACTOR: f32 = 0.1;
/// Component counts above this add complexity, below it subtract
const COMPONENT_PIVOT: f32 = 3.0;
const COMPONENT_FACTOR: f32 = 0.05;
const FUNCTIONAL_FACTOR: f32 = 0.08;
const TECHNICAL_FACTOR: f32 = 0.06;
const LONG_PROMPT_BONUS: f32 = 0.1;
const VERY_LONG_PROMPT_BONUS: f32 = 0.2;

/// Complexity scorer for resolved design intents
#[derive(Debug, Clone)]
pub struct ComplexityScorer {
    long_prompt_words: usize,
    very_long_prompt_words: usize,
}

impl Default for ComplexityScorer {
    fn default() -> Self {
        Self::new(50, 100)
    }
}

impl ComplexityScorer {
    /// Prompts with more than `long_prompt_words` words get a small bonus,
    /// more than `very_long_prompt_words` a larger one instead.
    pub fn new(long_prompt_words: usize, very_long_prompt_words: usize) -> Self {
        Self {
            long_prompt_words,
            very_long_prompt_words,
        }
    }

    /// Length bonus. The tiers are exclusive: a very long prompt gets only
    /// the larger bonus.
    fn length_bonus(&self, word_count: usize) -> f32 {
        if word_count > self.very_long_prompt_words {
            VERY_LONG_PROMPT_BONUS
        } else if word_count > self.long_prompt_words {
            LONG_PROMPT_BONUS
        } else {
            0.0
        }
    }

    /// Score a synthesized intent. No lower clamp is applied.
    pub fn score(&self, kb: &KnowledgeBase, intent: &DesignIntent, word_count: usize) -> f32 {
        let mut score = kb
            .page_type(&intent.page_type)
            .map(|p| p.complexity)
            .unwrap_or(UNKNOWN_PAGE_BASE);

        for style in &intent.style_preferences {
            if let Some(entry) = kb.style(style) {
                score += entry.complexity * STYLE_FACTOR;
            }
        }

        score += (intent.components.len() as f32 - COMPONENT_PIVOT) * COMPONENT_FACTOR;
        score += intent.functional_requirements.len() as f32 * FUNCTIONAL_FACTOR;
        score += intent.technical_requirements.len() as f32 * TECHNICAL_FACTOR;
        score += self.length_bonus(word_count);

        score.min(1.0)
    }
}
