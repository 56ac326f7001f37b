//! Report Command
//!
//! Assemble the full Markdown analysis report for a repository.

use std::path::PathBuf;

use console::style;

use crate::ai::create_generator;
use crate::config::ConfigLoader;
use crate::github::GitHubClient;
use crate::graph::MindmapBuilder;
use crate::report::ReportBuilder;
use crate::types::{RepoRef, ReportMode, Result};

pub async fn run(
    repo_ref: &RepoRef,
    reference: Option<&str>,
    mode: ReportMode,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = ConfigLoader::load()?;
    let github = GitHubClient::new(&config.github)?;
    let generator = create_generator(&config.llm);

    eprintln!("{} {}", style("Analyzing").green().bold(), repo_ref);

    let repo = github.repository(repo_ref).await?;
    let reference = match reference {
        Some(reference) => reference.to_string(),
        None => repo.default_branch.clone(),
    };
    let listing = github.tree(repo_ref, &reference).await?;

    let builder = ReportBuilder::new(
        &github,
        generator,
        MindmapBuilder::new(config.graph.max_nodes, config.graph.max_depth),
    );
    let report = builder.build(repo_ref, &repo, &listing, mode).await?;

    match output {
        Some(path) => {
            std::fs::write(&path, &report)?;
            println!("Report written to {}", path.display());
        }
        None => println!("{report}"),
    }

    Ok(())
}
