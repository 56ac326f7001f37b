//! Repository & File Analysis
//!
//! Heuristic analysis without real parsing: a rule-table architecture
//! classifier over the raw path set, and a per-file explainer that
//! prefers the text-generation capability with deterministic
//! heuristics as the guaranteed fallback.

pub mod architecture;
mod explain;
mod heuristics;

pub use architecture::{ArchitecturePattern, classify};
pub use explain::{AI_PREFIX, FileAnalyzer};
pub use heuristics::{advanced_explanation, beginner_explanation};
