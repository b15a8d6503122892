//! Analysis Packet - one classification plus everything observed producing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::ExtractedEntities;
use super::intent::DesignIntent;

/// Above this complexity a design is considered elaborate
const COMPLEX_THRESHOLD: f32 = 0.7;
/// At or below this confidence the caller should ask for more detail
const CLARIFICATION_THRESHOLD: f32 = 0.6;

/// Complete result of a single analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPacket {
    /// Unique id of this analysis (UUID v4)
    pub analysis_id: String,

    /// Original design brief
    pub prompt: String,

    /// Normalized tokens (lowercase, punctuation stripped, length > 2)
    pub tokens: Vec<String>,

    /// Catalog keys detected in the prompt
    pub entities: ExtractedEntities,

    /// The classified intent (the fallback intent if analysis failed)
    pub intent: DesignIntent,

    /// Reusable UI element components suggested by the prompt, deduplicated
    pub suggested_components: Vec<String>,

    /// Whether analysis failed and `intent` is the fallback
    pub used_fallback: bool,

    /// Error that triggered the fallback, if any
    pub error: Option<String>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl AnalysisPacket {
    /// Create a packet holding the fallback intent
    pub fn new(prompt: String) -> Self {
        Self {
            analysis_id: Uuid::new_v4().to_string(),
            prompt,
            tokens: vec![],
            entities: ExtractedEntities::default(),
            intent: DesignIntent::fallback(),
            suggested_components: vec![],
            used_fallback: true,
            error: None,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn is_complex(&self) -> bool {
        self.intent.complexity > COMPLEX_THRESHOLD
    }

    pub fn needs_clarification(&self) -> bool {
        self.used_fallback || self.intent.confidence <= CLARIFICATION_THRESHOLD
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Page: {} ({:.0}%), Styles: {}, Domain: {}, Complexity: {:.2}, Fallback: {}",
            self.intent.page_type,
            self.intent.confidence * 100.0,
            self.intent.style_preferences.join(", "),
            self.intent.business_domain,
            self.intent.complexity,
            if self.used_fallback { "yes" } else { "no" }
        )
    }
}
