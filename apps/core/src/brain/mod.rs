//! # Brain Module
//!
//! Fast, non-LLM analysis of UI design briefs.
//! Turns a free-text brief into a [`DesignIntent`] BEFORE any generation
//! stage runs, so every stage works from the same structured request.
//!
//! ## Components
//! - `knowledge_base`: ordered catalogs of page types, styles, domains and requirements
//! - `entities`: prompt normalization and keyword-based entity extraction
//! - `intent`: the `DesignIntent` record and its synthesis from entities
//! - `complexity`: design complexity scoring
//! - `confidence`: classification confidence scoring
//! - `analysis_packet`: analysis output with diagnostics
//! - `brief`: per-stage briefs for the generation pipeline
//! - `analyzer`: main orchestrator

pub mod analysis_packet;
pub mod analyzer;
pub mod brief;
pub mod complexity;
pub mod confidence;
pub mod entities;
pub mod intent;
pub mod knowledge_base;

pub use analysis_packet::AnalysisPacket;
pub use analyzer::IntentAnalyzer;
pub use brief::StageBriefs;
pub use complexity::ComplexityScorer;
pub use confidence::ConfidenceScorer;
pub use entities::ExtractedEntities;
pub use intent::{DesignIntent, FALLBACK_CONFIDENCE};
pub use knowledge_base::KnowledgeBase;
