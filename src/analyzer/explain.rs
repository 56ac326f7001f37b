//! File Explanation
//!
//! Two-step analysis for a single file: a text-generation attempt
//! first, heuristics as the guaranteed fallback. An absent capability
//! and a failed call land in the same branch, so the caller never sees
//! a generation error.

use tracing::debug;

use super::heuristics;
use crate::ai::{SharedGenerator, prompt};
use crate::types::{ExplainMode, utils::extension_of};

/// Marker prepended to generator-sourced output so callers can tell
/// the two origins apart without structured fields.
pub const AI_PREFIX: &str = "\u{2728} AI Analysis:\n";

/// Per-file explainer. Cheap to construct; holds only the optional
/// generator handle.
pub struct FileAnalyzer {
    generator: Option<SharedGenerator>,
}

impl FileAnalyzer {
    pub fn new(generator: Option<SharedGenerator>) -> Self {
        Self { generator }
    }

    /// Heuristics-only analyzer, for callers that never want a network
    /// round trip.
    pub fn heuristic_only() -> Self {
        Self { generator: None }
    }

    /// Explain a file for the given audience.
    ///
    /// Infallible and never empty: generation failures are logged at
    /// debug level and degrade silently to the heuristic path.
    pub async fn analyze(&self, file_name: &str, content: &str, mode: ExplainMode) -> String {
        let ext = extension_of(file_name);

        if let Some(generator) = &self.generator {
            let prompt = prompt::explain_file(&ext, content, mode);
            match generator.generate(&prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    return format!("{AI_PREFIX}{text}");
                }
                Ok(_) => {
                    debug!(file_name, "generator returned empty text, using heuristics");
                }
                Err(e) => {
                    debug!(file_name, error = %e, "generation failed, using heuristics");
                }
            }
        }

        match mode {
            ExplainMode::Beginner => heuristics::beginner_explanation(&ext, content),
            ExplainMode::Advanced => heuristics::advanced_explanation(file_name, &ext, content),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::TextGenerator;
    use crate::types::{RepoMapError, Result};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedGenerator(Result<String>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(RepoMapError::LlmApi("unavailable".to_string())),
            }
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn model(&self) -> &str {
            "test"
        }
    }

    #[tokio::test]
    async fn test_generator_output_is_prefixed() {
        let analyzer = FileAnalyzer::new(Some(Arc::new(FixedGenerator(Ok(
            "It renders the home page.".to_string(),
        )))));
        let text = analyzer
            .analyze("home.js", "export default {}", ExplainMode::Beginner)
            .await;
        assert_eq!(text, format!("{AI_PREFIX}It renders the home page."));
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back_to_heuristics() {
        let analyzer = FileAnalyzer::new(Some(Arc::new(FixedGenerator(Err(
            RepoMapError::LlmApi("boom".to_string()),
        )))));
        let text = analyzer
            .analyze("notes.md", "# Notes", ExplainMode::Beginner)
            .await;
        assert!(text.starts_with("This is a documentation file"));
        assert!(!text.contains("AI Analysis"));
    }

    #[tokio::test]
    async fn test_empty_generator_output_falls_back() {
        let analyzer =
            FileAnalyzer::new(Some(Arc::new(FixedGenerator(Ok("   \n".to_string())))));
        let text = analyzer
            .analyze("style.css", "body {}", ExplainMode::Beginner)
            .await;
        assert!(text.contains("how the website looks"));
    }

    #[tokio::test]
    async fn test_absent_capability_uses_heuristics() {
        let analyzer = FileAnalyzer::heuristic_only();
        let text = analyzer
            .analyze(
                "script.py",
                "def foo():\n  pass\ndef bar():\n  pass",
                ExplainMode::Advanced,
            )
            .await;
        assert!(text.contains("- **Functions (def)**: 2"));
    }

    #[tokio::test]
    async fn test_extension_is_case_insensitive() {
        let analyzer = FileAnalyzer::heuristic_only();
        let text = analyzer.analyze("README.MD", "", ExplainMode::Beginner).await;
        assert!(text.starts_with("This is a documentation file"));
    }
}
