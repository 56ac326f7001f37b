//! Unified Error Type System
//!
//! A single crate-wide error enum with `From` conversions for the
//! system-level failures (io, json, http) and structured variants for
//! the two upstream collaborators.
//!
//! ## Design Principles
//!
//! - The analysis core itself never fails: empty or partial input
//!   degrades to placeholder output, and text-generation failures are
//!   swallowed by the analyzer's fallback chain.
//! - Only the collaborators (GitHub API, LLM API, configuration) can
//!   surface errors, and the CLI layer decides how to report them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoMapError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("GitHub API rate limit exceeded, try again later")]
    RateLimited,

    #[error("GitHub API error ({status}): {message}")]
    GitHubApi { status: u16, message: String },

    /// Text-generation failures. Callers on the analysis path treat
    /// every variant of this uniformly as "no result".
    #[error("LLM API error: {0}")]
    LlmApi(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid repository reference '{0}': expected owner/name or a github.com URL")]
    InvalidRepoRef(String),
}

pub type Result<T> = std::result::Result<T, RepoMapError>;

impl RepoMapError {
    /// Map a GitHub response status to the matching error variant.
    pub fn from_github_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            403 | 429 => Self::RateLimited,
            _ => Self::GitHubApi {
                status,
                message: message.into(),
            },
        }
    }

    /// Check whether this error is the hosting API's rate limit.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

// =============================================================================
// Tests
// =============================================================================
