//! Arch Command
//!
//! Classify a repository's architecture pattern from its full tree
//! listing.

use console::style;

use crate::analyzer::architecture;
use crate::config::ConfigLoader;
use crate::github::GitHubClient;
use crate::types::{RepoRef, Result};

pub async fn run(repo: &RepoRef, reference: Option<&str>) -> Result<()> {
    let config = ConfigLoader::load()?;
    let github = GitHubClient::new(&config.github)?;

    let reference = match reference {
        Some(reference) => reference.to_string(),
        None => github.repository(repo).await?.default_branch,
    };
    let listing = github.tree(repo, &reference).await?;

    let pattern = architecture::classify(&listing);
    println!(
        "{} {}",
        style("Detected Pattern:").cyan().bold(),
        pattern.label()
    );

    Ok(())
}
