//! Text-Generation Provider Abstraction
//!
//! A single free-text-in, text-out trait over whatever backend is
//! configured. Providers are optional: [`create_generator`] returns
//! `None` when no credential is available, and callers treat that
//! exactly like a failed call.

mod openai;

pub use openai::OpenAiGenerator;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::LlmConfig;
use crate::types::Result;

/// Shared generator handle for concurrent use across commands.
pub type SharedGenerator = Arc<dyn TextGenerator + Send + Sync>;

/// Free-text prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Model currently in use.
    fn model(&self) -> &str;
}

/// Build a generator from configuration, or `None` when no credential
/// is configured. An unconfigured capability is not an error: the
/// analyzer and report builder fall back to heuristics either way.
pub fn create_generator(config: &LlmConfig) -> Option<SharedGenerator> {
    match OpenAiGenerator::new(config) {
        Ok(generator) => {
            debug!(model = generator.model(), "text generation enabled");
            Some(Arc::new(generator))
        }
        Err(e) => {
            debug!(error = %e, "text generation disabled");
            None
        }
    }
}
