//! Map Command
//!
//! Fetch a repository's recursive tree and print (or write) the
//! Mermaid mindmap.

use std::path::PathBuf;

use tracing::info;

use crate::config::ConfigLoader;
use crate::github::GitHubClient;
use crate::graph::MindmapBuilder;
use crate::types::{RepoRef, Result};

pub struct MapOptions {
    pub reference: Option<String>,
    pub max_nodes: Option<usize>,
    pub max_depth: Option<usize>,
    pub output: Option<PathBuf>,
}

pub async fn run(repo: &RepoRef, options: MapOptions) -> Result<()> {
    let config = ConfigLoader::load()?;
    let github = GitHubClient::new(&config.github)?;

    let reference = match options.reference {
        Some(reference) => reference,
        None => github.repository(repo).await?.default_branch,
    };
    let listing = github.tree(repo, &reference).await?;

    let builder = MindmapBuilder::new(
        options.max_nodes.unwrap_or(config.graph.max_nodes),
        options.max_depth.unwrap_or(config.graph.max_depth),
    );
    let mindmap = builder.build(&listing);
    info!(
        nodes = mindmap.node_count,
        edges = mindmap.edge_count,
        "mindmap built"
    );

    match options.output {
        Some(path) => {
            std::fs::write(&path, mindmap.to_mermaid())?;
            println!("Mindmap written to {}", path.display());
        }
        None => println!("{}", mindmap.to_mermaid()),
    }

    Ok(())
}
