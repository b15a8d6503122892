//! Design intent classification for UI generation.
//!
//! "The Brain" of the generation backend: classifies a natural-language UI
//! brief into a structured [`DesignIntent`](brain::DesignIntent) using static
//! keyword catalogs, with no model calls and no I/O.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{AnalysisPacket, DesignIntent, IntentAnalyzer, KnowledgeBase, StageBriefs};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, AppError};
pub use models::PromptAnalysisRequest;
