//! Test Module
//!
//! Scenario and property tests for the design intent engine.
//!
//! ## Test Categories
//! - `brain_tests`: classification scenarios, scoring boundaries, fallback, async wrapper
//! - `knowledge_base_tests`: loading, validating and swapping knowledge bases

pub mod brain_tests;
pub mod knowledge_base_tests;
