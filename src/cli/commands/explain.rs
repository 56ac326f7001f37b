//! Explain Command
//!
//! Fetch one file and print its explanation, AI-backed when a
//! credential is configured, heuristic otherwise.

use crate::ai::create_generator;
use crate::analyzer::FileAnalyzer;
use crate::config::ConfigLoader;
use crate::github::GitHubClient;
use crate::types::{ExplainMode, RepoRef, Result};

pub async fn run(repo: &RepoRef, path: &str, mode: ExplainMode) -> Result<()> {
    let config = ConfigLoader::load()?;
    let github = GitHubClient::new(&config.github)?;
    let generator = create_generator(&config.llm);

    let content = github.file_content(repo, path).await?;

    let analyzer = FileAnalyzer::new(generator);
    let explanation = analyzer.analyze(path, &content, mode).await;
    println!("{explanation}");

    Ok(())
}
