// src/analysis/mod.rs
pub mod analyzer;
pub mod prompts;
pub mod skills;
pub mod types;

pub use analyzer::CvAnalyzer;
pub use skills::FieldSkillSet;
pub use types::{AnalysisMode, AnalysisRequest, Field};
