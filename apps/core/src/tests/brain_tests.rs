//! Brain Module Tests
//!
//! End-to-end tests for design intent analysis: classification scenarios,
//! scoring boundaries, invariants and the fallback path.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::brain::{DesignIntent, IntentAnalyzer, KnowledgeBase, StageBriefs};
use crate::error::AppError;
use crate::models::PromptAnalysisRequest;

const SAMPLE_PROMPTS: &[&str] = &[
    "hi",
    "Build a modern SaaS landing page with responsive design",
    "Create an admin dashboard with dark theme, charts and user tables",
    "A minimalist blog for my writing about travel",
    "Design a colorful ecommerce store for kids toys with cart and checkout",
    "brutalist portfolio to showcase my creative projects",
    "contact form",
    "Login page with two factor authentication for an online bank",
    "!!!???",
];

/// Analyzer whose landing page is cheap enough that length bonuses are visible
fn low_base_analyzer() -> IntentAnalyzer {
    let mut kb = KnowledgeBase::builtin();
    for entry in kb.page_types.iter_mut().filter(|p| p.name == "landing") {
        entry.complexity = 0.1;
    }
    IntentAnalyzer::with_knowledge_base(kb)
}

fn words(n: usize) -> String {
    vec!["zzz"; n].join(" ")
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_saas_landing_page() {
        let analyzer = IntentAnalyzer::new();

        let intent = analyzer.analyze("Build a modern SaaS landing page with responsive design");

        assert_eq!(intent.page_type, "landing");
        assert_eq!(intent.layout, "single_column");
        assert_eq!(intent.style_preferences, vec!["modern"]);
        assert_eq!(intent.business_domain, "technology");
        assert_eq!(intent.target_audience, "developers");
        assert_eq!(intent.functional_requirements, vec!["responsive"]);
        assert_eq!(intent.technical_requirements, vec!["react_nextjs", "tailwind"]);
        assert_eq!(intent.confidence, 1.0);
        assert_eq!(intent.complexity, 1.0);
        assert!(intent.brand_personality.contains("scalable"));
    }

    #[test]
    fn test_short_greeting_gets_defaults() {
        let analyzer = IntentAnalyzer::new();

        let intent = analyzer.analyze("hi");

        assert_eq!(intent.page_type, "landing");
        assert_eq!(intent.style_preferences, vec!["modern"]);
        assert_eq!(intent.business_domain, "general");
        assert_eq!(intent.target_audience, "general");
        assert_eq!(intent.confidence, 0.5);
        assert!(!intent.is_fallback_grade());
    }

    #[test]
    fn test_dashboard_keyword() {
        let analyzer = IntentAnalyzer::new();

        let intent = analyzer.analyze("I need a dashboard");
        assert_eq!(intent.page_type, "dashboard");
        assert_eq!(
            intent.components,
            vec!["sidebar", "header", "stats_cards", "charts", "tables", "notifications"]
        );
    }

    #[test]
    fn test_tie_break_follows_catalog_order() {
        let analyzer = IntentAnalyzer::new();

        // ecommerce is mentioned first but dashboard is declared first
        assert_eq!(analyzer.analyze("shop dashboard").page_type, "dashboard");
        assert_eq!(analyzer.analyze("a dashboard for my shop").page_type, "dashboard");
    }

    #[test]
    fn test_audience_from_keywords_without_domain() {
        let analyzer = IntentAnalyzer::new();

        let intent = analyzer.analyze("A page for a freelance artist");

        assert_eq!(intent.business_domain, "general");
        assert_eq!(intent.target_audience, "creatives");
        let expected: BTreeSet<String> =
            ["friendly", "approachable"].iter().map(|s| s.to_string()).collect();
        assert_eq!(intent.brand_personality, expected);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        let analyzer = IntentAnalyzer::new();

        // "ts" is a typescript keyword and "charts" contains it
        let intent = analyzer.analyze("a dashboard with charts");
        assert_eq!(intent.technical_requirements, vec!["typescript"]);
    }

    #[test]
    fn test_authentication_page() {
        let analyzer = IntentAnalyzer::new();

        let intent = analyzer.analyze("Login page with two factor authentication for an online bank");

        assert_eq!(intent.page_type, "authentication");
        assert_eq!(intent.layout, "centered");
        assert_eq!(intent.business_domain, "finance");
        assert_eq!(intent.target_audience, "professionals");
        assert!(intent.technical_requirements.contains(&"authentication".to_string()));
    }
}

#[cfg(test)]
mod scoring_tests {
    use super::*;

    #[test]
    fn test_word_count_boundaries() {
        let analyzer = low_base_analyzer();

        // 0.1 + 0.06 + 0.15 + 0.08 + 0.12
        let base = 0.51;
        let at_fifty = analyzer.analyze(&words(50)).complexity;
        let at_fifty_one = analyzer.analyze(&words(51)).complexity;
        let at_hundred = analyzer.analyze(&words(100)).complexity;

        assert!((at_fifty - base).abs() < 1e-5, "50 words: {}", at_fifty);
        assert!((at_fifty_one - (base + 0.1)).abs() < 1e-5, "51 words: {}", at_fifty_one);
        assert!((at_hundred - (base + 0.1)).abs() < 1e-5, "100 words: {}", at_hundred);
    }

    #[test]
    fn test_long_prompt_bonus_is_not_cumulative() {
        let analyzer = low_base_analyzer();

        let intent = analyzer.analyze(&words(120));

        assert!((intent.complexity - 0.71).abs() < 1e-5, "120 words: {}", intent.complexity);
        assert_eq!(intent.page_type, "landing");
        // both confidence word tiers apply
        assert!((intent.confidence - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let analyzer = IntentAnalyzer::new();

        for prompt in SAMPLE_PROMPTS {
            let intent = analyzer.analyze(prompt);
            assert!(
                (0.0..=1.0).contains(&intent.complexity),
                "complexity out of range for '{}': {}",
                prompt,
                intent.complexity
            );
            assert!(
                (0.0..=1.0).contains(&intent.confidence),
                "confidence out of range for '{}': {}",
                prompt,
                intent.confidence
            );
        }
    }

    #[test]
    fn test_collections_never_empty() {
        let analyzer = IntentAnalyzer::new();

        for prompt in SAMPLE_PROMPTS {
            let intent = analyzer.analyze(prompt);
            assert!(!intent.components.is_empty(), "no components for '{}'", prompt);
            assert!(!intent.brand_personality.is_empty(), "no personality for '{}'", prompt);
            assert!(!intent.style_preferences.is_empty(), "no styles for '{}'", prompt);
            assert!(!intent.functional_requirements.is_empty());
            assert!(!intent.technical_requirements.is_empty());
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = IntentAnalyzer::new();

        for prompt in SAMPLE_PROMPTS {
            assert_eq!(analyzer.analyze(prompt), analyzer.analyze(prompt));
        }
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[test]
    fn test_malformed_catalog_yields_exact_default() {
        let mut kb = KnowledgeBase::builtin();
        kb.page_types.retain(|p| p.name != "landing");
        let analyzer = IntentAnalyzer::with_knowledge_base(kb);

        // nothing matches, so the page type defaults to landing, which has no entry
        let intent = analyzer.analyze("hello there");

        assert_eq!(intent, DesignIntent::fallback());
        assert_eq!(intent.confidence, 0.3);
        assert!(intent.is_fallback_grade());
    }

    #[test]
    fn test_healthy_entries_still_work_in_partially_broken_catalog() {
        let mut kb = KnowledgeBase::builtin();
        for entry in kb.page_types.iter_mut().filter(|p| p.name == "blog") {
            entry.layouts.clear();
        }
        let analyzer = IntentAnalyzer::with_knowledge_base(kb);

        assert_eq!(analyzer.analyze("my blog"), DesignIntent::fallback());
        assert_eq!(analyzer.analyze("my dashboard").page_type, "dashboard");
    }

    #[test]
    fn test_fallback_serializes_like_any_intent() {
        let json = serde_json::to_value(DesignIntent::fallback()).unwrap();

        assert_eq!(json["page_type"], "landing");
        assert_eq!(json["layout"], "single_column");
        assert_eq!(json["brand_personality"], serde_json::json!(["approachable", "friendly"]));
        assert_eq!(json["technical_requirements"], serde_json::json!(["react_nextjs", "tailwind"]));
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_async_matches_sync() {
        let analyzer = Arc::new(IntentAnalyzer::new());
        let prompt = "Design a colorful ecommerce store for kids toys with cart and checkout";

        let expected = analyzer.analyze(prompt);
        let actual = analyzer.clone().analyze_async(prompt.to_string()).await;

        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_concurrent_analyses_share_one_analyzer() {
        let analyzer = Arc::new(IntentAnalyzer::new());

        let handles: Vec<_> = SAMPLE_PROMPTS
            .iter()
            .map(|p| tokio::spawn(analyzer.clone().analyze_async(p.to_string())))
            .collect();

        for (handle, prompt) in handles.into_iter().zip(SAMPLE_PROMPTS) {
            let intent = handle.await.unwrap();
            assert_eq!(intent, analyzer.analyze(prompt));
        }
    }

    #[test]
    fn test_request_validation() {
        let analyzer = IntentAnalyzer::new();

        let ok = analyzer.analyze_request(&PromptAnalysisRequest::new("a blog about cooking"));
        assert_eq!(ok.unwrap().page_type, "blog");

        let empty = analyzer.analyze_request(&PromptAnalysisRequest::new(""));
        assert!(matches!(empty, Err(AppError::Validation(_))));

        let too_long = analyzer.analyze_request(&PromptAnalysisRequest::new("a".repeat(2001)));
        assert!(matches!(too_long, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_packet_and_briefs() {
        let analyzer = IntentAnalyzer::new();

        let packet = analyzer.analyze_packet("Create an admin dashboard with dark theme, charts and user tables");
        assert!(!packet.used_fallback);
        assert!(packet.error.is_none());
        assert!(packet.tokens.contains(&"dashboard".to_string()));
        assert_eq!(packet.entities.styles, vec!["dark"]);
        assert!(packet.entities.ui_element_groups.contains(&"data_display".to_string()));
        assert!(packet.is_complex());
        assert!(!packet.needs_clarification());

        let briefs = StageBriefs::from_intent(&packet.intent);
        assert!(briefs.architecture.contains("Page Type: dashboard"));
        assert!(briefs.architecture.contains("Layout Structure: sidebar_left"));
        assert!(briefs.style.contains("Style Preferences: dark"));
        assert!(briefs.style.contains("premium"));
    }
}
