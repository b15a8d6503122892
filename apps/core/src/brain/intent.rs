//! Design intent record and its synthesis from extracted entities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entities::ExtractedEntities;
use super::knowledge_base::{KnowledgeBase, DEFAULT_PAGE_TYPE};
use crate::error::AnalysisError;

/// Confidence reported by the fallback intent. Anything at or below it is not
/// a real classification.
pub const FALLBACK_CONFIDENCE: f32 = 0.3;

const DEFAULT_STYLE: &str = "modern";
const GENERAL: &str = "general";
const DEFAULT_PERSONALITY: &[&str] = &["friendly", "approachable"];
const DEFAULT_FUNCTIONAL: &[&str] = &["responsive"];
const DEFAULT_TECHNICAL: &[&str] = &["react_nextjs", "tailwind"];

/// Structured interpretation of a UI design brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignIntent {
    pub page_type: String,
    pub style_preferences: Vec<String>,
    pub components: Vec<String>,
    pub layout: String,
    /// Heuristic complexity (0.0 - 1.0)
    pub complexity: f32,
    pub business_domain: String,
    pub target_audience: String,
    /// Unordered set of traits, kept sorted so output is deterministic
    pub brand_personality: BTreeSet<String>,
    pub functional_requirements: Vec<String>,
    pub technical_requirements: Vec<String>,
    /// Signal strength of the classification (0.0 - 1.0)
    pub confidence: f32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DesignIntent {
    /// The intent returned whenever analysis fails
    pub fn fallback() -> Self {
        Self {
            page_type: DEFAULT_PAGE_TYPE.to_string(),
            style_preferences: vec![DEFAULT_STYLE.to_string()],
            components: strings(&["header", "hero", "features", "footer"]),
            layout: "single_column".to_string(),
            complexity: 0.5,
            business_domain: GENERAL.to_string(),
            target_audience: GENERAL.to_string(),
            brand_personality: DEFAULT_PERSONALITY.iter().map(|s| s.to_string()).collect(),
            functional_requirements: strings(DEFAULT_FUNCTIONAL),
            technical_requirements: strings(DEFAULT_TECHNICAL),
            confidence: FALLBACK_CONFIDENCE,
        }
    }

    /// True when the confidence is too low to be a real classification
    pub fn is_fallback_grade(&self) -> bool {
        self.confidence <= FALLBACK_CONFIDENCE
    }

    /// Resolve detected entities into an intent. Scores are left at zero.
    pub fn synthesize(
        kb: &KnowledgeBase,
        entities: &ExtractedEntities,
        prompt_lower: &str,
    ) -> Result<Self, AnalysisError> {
        let page_type = entities
            .page_types
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_PAGE_TYPE.to_string());

        // Unknown page types borrow the landing entry
        let pattern = kb
            .page_type(&page_type)
            .or_else(|| kb.page_type(DEFAULT_PAGE_TYPE))
            .ok_or_else(|| AnalysisError::UnknownPageType(page_type.clone()))?;

        if pattern.components.is_empty() {
            return Err(AnalysisError::EmptyComponents(pattern.name.clone()));
        }
        let layout = pattern
            .layouts
            .first()
            .cloned()
            .ok_or_else(|| AnalysisError::EmptyLayouts(pattern.name.clone()))?;

        let style_preferences = if entities.styles.is_empty() {
            vec![DEFAULT_STYLE.to_string()]
        } else {
            entities.styles.clone()
        };

        let business_domain = entities
            .domains
            .first()
            .cloned()
            .unwrap_or_else(|| GENERAL.to_string());

        let target_audience = match kb.domain(&business_domain) {
            Some(domain) => domain.audience.clone(),
            None => ExtractedEntities::detect_audience(kb, prompt_lower)
                .unwrap_or_else(|| GENERAL.to_string()),
        };

        let mut brand_personality: BTreeSet<String> = style_preferences
            .iter()
            .flat_map(|s| kb.style_traits(s).iter().cloned())
            .collect();
        if let Some(domain) = kb.domain(&business_domain) {
            brand_personality.extend(domain.characteristics.iter().cloned());
        }
        if brand_personality.is_empty() {
            brand_personality = DEFAULT_PERSONALITY.iter().map(|s| s.to_string()).collect();
        }

        let functional_requirements = if entities.functional.is_empty() {
            strings(DEFAULT_FUNCTIONAL)
        } else {
            entities.functional.clone()
        };

        let technical_requirements = if entities.technical.is_empty() {
            strings(DEFAULT_TECHNICAL)
        } else {
            entities.technical.clone()
        };

        Ok(Self {
            page_type,
            style_preferences,
            components: pattern.components.clone(),
            layout,
            complexity: 0.0,
            business_domain,
            target_audience,
            brand_personality,
            functional_requirements,
            technical_requirements,
            confidence: 0.0,
        })
    }
}
