//! Stage briefs handed to the generation pipeline.
//!
//! Each generation stage only needs a slice of the intent. These briefs render
//! that slice as plain text the orchestrator embeds in its model prompts.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::intent::DesignIntent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageBriefs {
    /// Component hierarchy and layout planning
    pub architecture: String,
    /// Visual style variations
    pub style: String,
    /// Code generation
    pub code: String,
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(fields: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (label, value) in fields {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}: {}", label, value);
    }
    out
}

impl StageBriefs {
    pub fn from_intent(intent: &DesignIntent) -> Self {
        let architecture = render(&[
            ("Page Type", intent.page_type.clone()),
            ("Components Needed", join(&intent.components)),
            ("Layout Structure", intent.layout.clone()),
            ("Complexity Level", format!("{:.2}", intent.complexity)),
            ("Target Audience", intent.target_audience.clone()),
            ("Business Domain", intent.business_domain.clone()),
        ]);

        let style = render(&[
            ("Style Preferences", join(&intent.style_preferences)),
            ("Brand Personality", join(&intent.brand_personality)),
            ("Business Domain", intent.business_domain.clone()),
        ]);

        let code = render(&[
            ("Technical Requirements", join(&intent.technical_requirements)),
            ("Functional Requirements", join(&intent.functional_requirements)),
        ]);

        Self {
            architecture,
            style,
            code,
        }
    }
}
