//! Prompt Construction
//!
//! All prompts sent to the text-generation capability are built here,
//! so wording changes stay in one place and the embedding rules
//! (extension, 1000-character sample) are applied consistently.

use crate::constants::analysis::CONTENT_SAMPLE_CHARS;
use crate::types::{ExplainMode, truncate_chars};

/// System role given to the chat API.
pub const SYSTEM_ROLE: &str = "You are an expert software architect acting as a backend for a repository analysis tool. Be concise and technical.";

/// Mode-specific prompt for a single file: the extension plus the
/// first 1000 characters of content.
pub fn explain_file(ext: &str, content: &str, mode: ExplainMode) -> String {
    let sample = truncate_chars(content, CONTENT_SAMPLE_CHARS);
    match mode {
        ExplainMode::Beginner => format!(
            "Explain this {ext} file for a beginner student in 2-3 sentences: \n\n{sample}"
        ),
        ExplainMode::Advanced => format!(
            "Provide an advanced technical summary of this {ext} file, highlighting patterns and logic: \n\n{sample}"
        ),
    }
}

/// Key features inferred from languages and description.
pub fn features(languages: &str, description: &str) -> String {
    format!(
        "Based on these languages: {languages} and description: {description}, list 4 key features this project likely provides."
    )
}

/// Benefits of a detected architecture pattern.
pub fn architecture_benefits(pattern: &str) -> String {
    format!("Explain the benefits of {pattern} for a developer in 3 bullet points.")
}

/// Roadmap suggestions for the report's final section.
pub fn roadmap(languages: &str) -> String {
    format!(
        "Suggest 3 professional improvements for a GitHub project using {languages}. Format as bullet points."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_file_embeds_extension() {
        let p = explain_file("py", "print('hi')", ExplainMode::Beginner);
        assert!(p.contains("this py file"));
        assert!(p.contains("print('hi')"));
        assert!(p.contains("beginner student"));

        let p = explain_file("js", "let x = 1;", ExplainMode::Advanced);
        assert!(p.contains("advanced technical summary"));
    }

    #[test]
    fn test_explain_file_truncates_sample() {
        let long = "x".repeat(5000);
        let p = explain_file("js", &long, ExplainMode::Beginner);
        // Prompt carries at most the sample limit of content
        assert!(p.len() < 1200);
    }

    #[test]
    fn test_report_prompts() {
        assert!(features("Rust, Python", "a tool").contains("Rust, Python"));
        assert!(architecture_benefits("MVC").contains("benefits of MVC"));
        assert!(roadmap("Rust").contains("3 professional improvements"));
    }
}
