//! Knowledge Base Tests
//!
//! Loading catalogs from JSON, validating them, and analyzing with custom catalogs.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::brain::knowledge_base::{KeywordEntry, PageTypeEntry};
use crate::brain::{DesignIntent, IntentAnalyzer, KnowledgeBase};
use crate::config::AnalyzerConfig;
use crate::error::AppError;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[cfg(test)]
mod loading_tests {
    use super::*;

    #[test]
    fn test_json_round_trip_preserves_order() {
        let kb = KnowledgeBase::builtin();
        let json = kb.to_json().unwrap();

        let loaded = KnowledgeBase::from_json_str(&json).unwrap();
        assert_eq!(loaded, kb);
    }

    #[test]
    fn test_from_path() {
        let file = write_temp(&KnowledgeBase::builtin().to_json().unwrap());

        let loaded = KnowledgeBase::from_path(file.path()).unwrap();
        assert_eq!(loaded.page_types.len(), 7);
        assert_eq!(loaded.styles.len(), 6);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = KnowledgeBase::from_path("/nonexistent/knowledge_base.json");
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_validation_error() {
        let result = KnowledgeBase::from_json_str("{ \"page_types\": [");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_ui_element_groups_are_optional() {
        let mut value = serde_json::to_value(KnowledgeBase::builtin()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .remove("ui_element_groups");

        let loaded = KnowledgeBase::from_json_str(&value.to_string()).unwrap();
        assert!(loaded.ui_element_groups.is_empty());
        assert!(loaded.validate().is_ok());
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_analyzer_from_config_file() {
        let file = write_temp(&KnowledgeBase::builtin().to_json().unwrap());
        let config = AnalyzerConfig::default().with_knowledge_base_path(file.path());

        let analyzer = IntentAnalyzer::from_config(&config).unwrap();
        let prompt = "A dark analytics dashboard for a trading desk";

        assert_eq!(analyzer.analyze(prompt), IntentAnalyzer::new().analyze(prompt));
    }

    #[test]
    fn test_invalid_catalog_file_is_rejected() {
        let mut kb = KnowledgeBase::builtin();
        kb.page_types.retain(|p| p.name != "landing");
        let file = write_temp(&kb.to_json().unwrap());
        let config = AnalyzerConfig::default().with_knowledge_base_path(file.path());

        let result = IntentAnalyzer::from_config(&config);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_unvalidated_catalog_still_never_fails_analysis() {
        let mut kb = KnowledgeBase::builtin();
        kb.page_types.retain(|p| p.name != "landing");
        let analyzer = IntentAnalyzer::with_knowledge_base(kb);

        assert_eq!(analyzer.analyze("something plain"), DesignIntent::fallback());
    }
}

#[cfg(test)]
mod custom_catalog_tests {
    use super::*;

    #[test]
    fn test_custom_page_type_declared_first_wins() {
        let mut kb = KnowledgeBase::builtin();
        kb.page_types.insert(
            0,
            PageTypeEntry {
                name: "documentation".to_string(),
                components: vec!["sidebar".to_string(), "search".to_string(), "article".to_string()],
                layouts: vec!["docs_two_column".to_string()],
                complexity: 0.5,
                keywords: vec!["docs".to_string(), "documentation".to_string()],
            },
        );
        let analyzer = IntentAnalyzer::try_with_knowledge_base(kb).unwrap();

        let intent = analyzer.analyze("documentation site with a blog");

        assert_eq!(intent.page_type, "documentation");
        assert_eq!(intent.layout, "docs_two_column");
        assert_eq!(intent.components.len(), 3);
    }

    #[test]
    fn test_custom_technical_requirement() {
        let mut kb = KnowledgeBase::builtin();
        kb.technical.push(KeywordEntry {
            name: "graphql".to_string(),
            keywords: vec!["graphql".to_string()],
        });
        let analyzer = IntentAnalyzer::try_with_knowledge_base(kb).unwrap();

        let intent = analyzer.analyze("a landing page backed by graphql");

        assert_eq!(intent.technical_requirements, vec!["graphql"]);
    }
}
