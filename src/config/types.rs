//! Configuration Types
//!
//! All configuration structures with sensible defaults. Credentials
//! are never serialized back out and are redacted in debug output;
//! runtime protection happens in the clients, which convert them to
//! `SecretString`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{github, graph, network};
use crate::types::{RepoMapError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// GitHub API settings
    pub github: GithubConfig,

    /// Text-generation provider settings
    pub llm: LlmConfig,

    /// Mindmap limits
    pub graph: GraphConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            github: GithubConfig::default(),
            llm: LlmConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `RepoMapError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if Url::parse(&self.github.api_base).is_err() {
            return Err(RepoMapError::Config(format!(
                "github.api_base is not a valid URL: {}",
                self.github.api_base
            )));
        }
        if Url::parse(&self.llm.api_base).is_err() {
            return Err(RepoMapError::Config(format!(
                "llm.api_base is not a valid URL: {}",
                self.llm.api_base
            )));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(RepoMapError::Config(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.github.timeout_secs == 0 || self.llm.timeout_secs == 0 {
            return Err(RepoMapError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.graph.max_nodes == 0 || self.graph.max_depth == 0 {
            return Err(RepoMapError::Config(
                "graph.max_nodes and graph.max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// GitHub Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API base URL (override for GitHub Enterprise)
    pub api_base: String,

    /// Personal access token; unauthenticated access works with lower
    /// rate limits. Never serialized to output.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: github::API_BASE.to_string(),
            token: None,
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model name
    pub model: String,

    /// API key; never serialized to output
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL (for OpenAI-compatible endpoints)
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            timeout_secs: 60,
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

// =============================================================================
// Graph Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Soft cap on emitted mindmap nodes
    pub max_nodes: usize,

    /// Maximum path depth shown in the mindmap
    pub max_depth: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_nodes: graph::DEFAULT_MAX_NODES,
            max_depth: graph::DEFAULT_MAX_DEPTH,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = Config::default();
        config.llm.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_api_base() {
        let mut config = Config::default();
        config.github.api_base = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.graph.max_nodes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_secrets_not_serialized() {
        let config = Config {
            github: GithubConfig {
                token: Some("ghp_secret".to_string()),
                ..GithubConfig::default()
            },
            llm: LlmConfig {
                api_key: Some("sk-secret".to_string()),
                ..LlmConfig::default()
            },
            ..Config::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("ghp_secret"));
        assert!(!json.contains("sk-secret"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("ghp_secret"));
        assert!(!debug.contains("sk-secret"));
    }
}
