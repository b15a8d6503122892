//! Intent Analyzer - main entry point of the Brain module.
//!
//! Runs normalization, entity extraction, intent synthesis, complexity and
//! confidence scoring over an owned, immutable knowledge base.
//!
//! Analysis never fails from the caller's point of view: any internal error
//! is logged and replaced by [`DesignIntent::fallback`].

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use validator::Validate;

use super::analysis_packet::AnalysisPacket;
use super::complexity::ComplexityScorer;
use super::confidence::ConfidenceScorer;
use super::entities::{self, ExtractedEntities};
use super::intent::DesignIntent;
use super::knowledge_base::KnowledgeBase;
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, AppError};
use crate::models::PromptAnalysisRequest;

/// Intermediate products of one successful analysis
struct Analysis {
    tokens: Vec<String>,
    entities: ExtractedEntities,
    intent: DesignIntent,
}

/// Design intent classifier. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct IntentAnalyzer {
    knowledge_base: KnowledgeBase,
    complexity_scorer: ComplexityScorer,
    confidence_scorer: ConfidenceScorer,
}

impl Default for IntentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentAnalyzer {
    /// Create an analyzer over the built-in catalogs
    pub fn new() -> Self {
        Self::with_knowledge_base(KnowledgeBase::builtin())
    }

    /// Use `knowledge_base` as-is, without validation.
    ///
    /// A malformed knowledge base does not panic; analyses that hit the
    /// malformed part return the fallback intent.
    pub fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Self {
        Self {
            knowledge_base,
            complexity_scorer: ComplexityScorer::default(),
            confidence_scorer: ConfidenceScorer::new(),
        }
    }

    /// Validate `knowledge_base` before using it
    pub fn try_with_knowledge_base(knowledge_base: KnowledgeBase) -> Result<Self, AppError> {
        knowledge_base.validate()?;
        Ok(Self::with_knowledge_base(knowledge_base))
    }

    /// Build from configuration, loading and validating the knowledge base file if set
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AppError> {
        config.validate()?;

        let knowledge_base = match &config.knowledge_base_path {
            Some(path) => KnowledgeBase::from_path(path)?,
            None => KnowledgeBase::builtin(),
        };

        let mut analyzer = Self::try_with_knowledge_base(knowledge_base)?;
        analyzer.complexity_scorer =
            ComplexityScorer::new(config.long_prompt_words, config.very_long_prompt_words);
        Ok(analyzer)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    fn run(&self, prompt: &str) -> Result<Analysis, AnalysisError> {
        let prompt_lower = prompt.to_lowercase();
        let word_count = entities::word_count(prompt);

        // 1. Normalize
        let tokens = entities::tokenize(prompt);

        // 2. Extract entities
        let entities = ExtractedEntities::extract(&self.knowledge_base, &prompt_lower);

        // 3. Synthesize intent
        let mut intent = DesignIntent::synthesize(&self.knowledge_base, &entities, &prompt_lower)?;

        // 4. Score
        intent.complexity = self
            .complexity_scorer
            .score(&self.knowledge_base, &intent, word_count);
        intent.confidence = self.confidence_scorer.score(
            &self.knowledge_base,
            &entities,
            &prompt_lower,
            word_count,
        );

        Ok(Analysis {
            tokens,
            entities,
            intent,
        })
    }

    /// Analyze, surfacing internal errors instead of falling back
    pub fn try_analyze(&self, prompt: &str) -> Result<DesignIntent, AnalysisError> {
        self.run(prompt).map(|analysis| analysis.intent)
    }

    /// Classify a design brief. Always returns an intent.
    pub fn analyze(&self, prompt: &str) -> DesignIntent {
        match self.try_analyze(prompt) {
            Ok(intent) => {
                debug!(
                    page_type = %intent.page_type,
                    domain = %intent.business_domain,
                    complexity = intent.complexity,
                    confidence = intent.confidence,
                    "Design intent analyzed"
                );
                intent
            }
            Err(e) => {
                warn!(
                    error = %e,
                    prompt_chars = prompt.chars().count(),
                    "Design intent analysis failed, using fallback intent"
                );
                DesignIntent::fallback()
            }
        }
    }

    /// Same as [`analyze`](Self::analyze), run on the blocking pool so async
    /// callers can await it alongside other work.
    pub async fn analyze_async(self: Arc<Self>, prompt: String) -> DesignIntent {
        match tokio::task::spawn_blocking(move || self.analyze(&prompt)).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!(error = %e, "Design intent analysis task failed, using fallback intent");
                DesignIntent::fallback()
            }
        }
    }

    /// Validate a client request, then analyze its prompt
    pub fn analyze_request(&self, request: &PromptAnalysisRequest) -> Result<DesignIntent, AppError> {
        request.validate()?;
        Ok(self.analyze(&request.prompt))
    }

    /// Analyze and keep the intermediate results, timing and fallback status
    pub fn analyze_packet(&self, prompt: &str) -> AnalysisPacket {
        let start = Instant::now();
        let mut packet = AnalysisPacket::new(prompt.to_string());

        match self.run(prompt) {
            Ok(analysis) => {
                packet.suggested_components = self.suggest_components(&analysis.entities);
                packet.tokens = analysis.tokens;
                packet.entities = analysis.entities;
                packet.intent = analysis.intent;
                packet.used_fallback = false;
            }
            Err(e) => {
                warn!(
                    analysis_id = %packet.analysis_id,
                    error = %e,
                    "Design intent analysis failed, using fallback intent"
                );
                packet.error = Some(e.to_string());
            }
        }

        packet.processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(analysis_id = %packet.analysis_id, "{}", packet.summary());
        packet
    }

    /// Components of every detected UI element group, first occurrence wins
    fn suggest_components(&self, entities: &ExtractedEntities) -> Vec<String> {
        let mut suggested: Vec<String> = Vec::new();
        for group in entities
            .ui_element_groups
            .iter()
            .filter_map(|name| self.knowledge_base.ui_element_group(name))
        {
            for component in &group.components {
                if !suggested.contains(component) {
                    suggested.push(component.clone());
                }
            }
        }
        suggested
    }
}
