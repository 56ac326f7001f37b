//! Markdown Report Assembly
//!
//! Renders the analysis artifacts (mindmap, architecture label, file
//! explanations, repository metadata) into one Markdown document. The
//! layout follows a slide-deck outline: title, executive summary,
//! per-topic sections, roadmap.
//!
//! Every AI-sourced section carries a fixed fallback, so a report
//! always completes even with the text-generation capability absent.

use std::fmt::Write as _;

use chrono::Utc;
use tracing::{debug, warn};

use crate::ai::{SharedGenerator, prompt};
use crate::analyzer::{FileAnalyzer, architecture};
use crate::constants::report as limits;
use crate::github::{GitHubClient, Repository};
use crate::graph::MindmapBuilder;
use crate::types::{
    EntryKind, ExplainMode, RepoRef, ReportMode, Result, TreeEntry, TreeListing, truncate_chars,
};

const FEATURES_FALLBACK: &str = "\u{2022} Modular codebase design\n\u{2022} Automated build process\n\u{2022} Integrated documentation\n\u{2022} Version-controlled development";
const ARCHITECTURE_FALLBACK: &str =
    "\u{2022} Promotes scalability\n\u{2022} Simplifies maintenance\n\u{2022} Enhances code reuse";
const ROADMAP_FALLBACK: &str = "\u{2022} Enhance unit test coverage.\n\u{2022} Improve API documentation.\n\u{2022} Optimize performance for scale.";

/// File names preferred for the core-module deep dive, in order.
const CORE_FILE_MARKERS: &[&str] = &["index.js", "main.py", "App.js"];

/// Assembles Markdown reports from live repository data.
pub struct ReportBuilder<'a> {
    github: &'a GitHubClient,
    generator: Option<SharedGenerator>,
    mindmap: MindmapBuilder,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(
        github: &'a GitHubClient,
        generator: Option<SharedGenerator>,
        mindmap: MindmapBuilder,
    ) -> Self {
        Self {
            github,
            generator,
            mindmap,
        }
    }

    /// Build the full report for an already-fetched repository and
    /// listing. Only the supplementary sections (languages, commits,
    /// branches, deep dive) trigger further API calls.
    pub async fn build(
        &self,
        repo_ref: &RepoRef,
        repo: &Repository,
        listing: &TreeListing,
        mode: ReportMode,
    ) -> Result<String> {
        let mut doc = String::new();

        self.title_section(&mut doc, repo, mode);
        self.summary_section(&mut doc, repo_ref, repo).await;

        match mode {
            ReportMode::Basic => self.basic_sections(&mut doc, repo_ref, repo).await?,
            ReportMode::Advanced => {
                self.advanced_sections(&mut doc, repo_ref, repo, listing)
                    .await?;
            }
        }

        self.structure_section(&mut doc, listing);
        self.roadmap_section(&mut doc, repo_ref).await?;

        Ok(doc)
    }

    fn title_section(&self, doc: &mut String, repo: &Repository, mode: ReportMode) {
        let subtitle = match mode {
            ReportMode::Advanced => "Technical Architecture & Roadmap",
            ReportMode::Basic => "Project Overview & Features",
        };
        let _ = writeln!(doc, "# {}", repo.full_name);
        let _ = writeln!(doc, "\n_{subtitle}_");
        let _ = writeln!(doc, "\n_Generated on {}_\n", Utc::now().format("%Y-%m-%d"));
    }

    /// Summary with stats and a readme excerpt. Both extras degrade
    /// gracefully: missing contributors drop the line, a missing
    /// readme becomes a notice.
    async fn summary_section(&self, doc: &mut String, repo_ref: &RepoRef, repo: &Repository) {
        let description = repo
            .description
            .as_deref()
            .unwrap_or("A software project hosted on GitHub.");

        let _ = writeln!(doc, "## Executive Summary\n");
        let _ = writeln!(doc, "{description}\n");
        let _ = writeln!(doc, "- Stars: {}", repo.stargazers_count);
        let _ = writeln!(doc, "- Forks: {}", repo.forks_count);
        let _ = writeln!(doc, "- Watchers: {}", repo.watchers_count);
        let _ = writeln!(doc, "- Open Issues: {}", repo.open_issues_count);

        match self.github.contributors(repo_ref).await {
            Ok(contributors) => {
                // The endpoint is capped; a full page reads as "N+"
                let suffix = if contributors.len() >= crate::constants::github::CONTRIBUTOR_LIMIT {
                    "+"
                } else {
                    ""
                };
                let _ = writeln!(doc, "- Contributors: {}{suffix}", contributors.len());
            }
            Err(e) => debug!(error = %e, "contributor count unavailable"),
        }
        doc.push('\n');

        match self.github.readme(repo_ref).await {
            Ok(readme) => {
                let _ = writeln!(
                    doc,
                    "{}...\n",
                    truncate_chars(readme.trim(), limits::README_EXCERPT_CHARS)
                );
            }
            Err(_) => {
                let _ = writeln!(doc, "No README found.\n");
            }
        }
    }

    async fn basic_sections(
        &self,
        doc: &mut String,
        repo_ref: &RepoRef,
        repo: &Repository,
    ) -> Result<()> {
        let languages = self.github.languages(repo_ref).await?;
        let language_names = languages
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let description = repo.description.as_deref().unwrap_or_default();
        let features = self
            .generate_or(
                prompt::features(&language_names, description),
                FEATURES_FALLBACK,
            )
            .await;

        let _ = writeln!(doc, "## Core Features\n");
        let _ = writeln!(doc, "{features}\n");

        let _ = writeln!(doc, "## Technology Stack\n");
        for language in languages.iter().take(limits::LANGUAGE_LIMIT) {
            let _ = writeln!(doc, "- {}", language.name);
        }
        doc.push('\n');

        Ok(())
    }

    async fn advanced_sections(
        &self,
        doc: &mut String,
        repo_ref: &RepoRef,
        repo: &Repository,
        listing: &TreeListing,
    ) -> Result<()> {
        // Architecture & patterns
        let pattern = architecture::classify(listing);
        let benefits = self
            .generate_or(
                prompt::architecture_benefits(pattern.label()),
                ARCHITECTURE_FALLBACK,
            )
            .await;

        let _ = writeln!(doc, "## Architecture & Patterns\n");
        let _ = writeln!(doc, "**Detected Pattern**: {}\n", pattern.label());
        let _ = writeln!(doc, "{benefits}\n");

        // Recent development activity
        let commits = self
            .github
            .commits(
                repo_ref,
                Some(&repo.default_branch),
                limits::ACTIVITY_COMMITS,
            )
            .await?;

        let _ = writeln!(doc, "## Recent Development Activity\n");
        for commit in &commits {
            let message = commit.commit.message.lines().next().unwrap_or_default();
            let _ = writeln!(
                doc,
                "- {}: {}... ({})",
                commit.commit.author.date.format("%Y-%m-%d"),
                truncate_chars(message, limits::COMMIT_MESSAGE_CHARS),
                commit.commit.author.name
            );
        }
        doc.push('\n');

        // Branching & governance
        let branches = self.github.branches(repo_ref).await?;
        let _ = writeln!(doc, "## Branching & Governance\n");
        let _ = writeln!(doc, "Total branches: {}\n", branches.len());
        for branch in branches.iter().take(limits::BRANCH_LIMIT) {
            let marker = if branch.name == repo.default_branch {
                " (Default)"
            } else {
                ""
            };
            let _ = writeln!(doc, "- {}{marker}", branch.name);
        }
        doc.push('\n');

        // Core module deep dive
        self.deep_dive_section(doc, repo_ref, listing).await;

        Ok(())
    }

    /// Analyze one representative file in depth. Unreachable or absent
    /// content degrades to a notice instead of failing the report.
    async fn deep_dive_section(&self, doc: &mut String, repo_ref: &RepoRef, listing: &TreeListing) {
        let Some(core_file) = find_core_file(listing) else {
            return;
        };

        let _ = writeln!(doc, "## Core Module Analysis\n");
        let _ = writeln!(doc, "File: `{}`\n", core_file.path);

        match self.github.file_content(repo_ref, &core_file.path).await {
            Ok(content) => {
                let analyzer = FileAnalyzer::new(self.generator.clone());
                let analysis = analyzer
                    .analyze(&core_file.path, &content, ExplainMode::Advanced)
                    .await;
                let _ = writeln!(
                    doc,
                    "{}\n",
                    truncate_chars(&analysis, limits::DEEP_DIVE_CHARS)
                );
            }
            Err(e) => {
                warn!(path = %core_file.path, error = %e, "deep dive skipped");
                let _ = writeln!(doc, "Analysis skipped (file too large or unreachable).\n");
            }
        }
    }

    fn structure_section(&self, doc: &mut String, listing: &TreeListing) {
        let mindmap = self.mindmap.build(listing);

        let _ = writeln!(doc, "## Repository Structure\n");
        let _ = writeln!(
            doc,
            "{} nodes, {} edges\n",
            mindmap.node_count, mindmap.edge_count
        );
        let _ = writeln!(doc, "```mermaid\n{}\n```\n", mindmap.to_mermaid());
    }

    async fn roadmap_section(&self, doc: &mut String, repo_ref: &RepoRef) -> Result<()> {
        let languages = self.github.languages(repo_ref).await?;
        let top_languages = languages
            .iter()
            .take(limits::ROADMAP_LANGUAGES)
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let roadmap = self
            .generate_or(prompt::roadmap(&top_languages), ROADMAP_FALLBACK)
            .await;

        let _ = writeln!(doc, "## Recommendations & Roadmap\n");
        let _ = writeln!(doc, "{roadmap}");

        Ok(())
    }

    /// Run the generator against a fixed fallback; any failure or empty
    /// response degrades silently.
    async fn generate_or(&self, prompt: String, fallback: &str) -> String {
        if let Some(generator) = &self.generator {
            match generator.generate(&prompt).await {
                Ok(text) if !text.trim().is_empty() => return bulletize(&text),
                Ok(_) => debug!("generator returned empty text, using fallback"),
                Err(e) => debug!(error = %e, "generation failed, using fallback"),
            }
        }
        fallback.to_string()
    }
}

/// First file matching a core-entry marker, else the first blob.
fn find_core_file(listing: &TreeListing) -> Option<&TreeEntry> {
    listing
        .tree
        .iter()
        .find(|entry| {
            entry.kind == EntryKind::Blob
                && CORE_FILE_MARKERS.iter().any(|m| entry.path.contains(m))
        })
        .or_else(|| listing.tree.iter().find(|e| e.kind == EntryKind::Blob))
}

/// Normalize generator markdown for report embedding: strip bold
/// markers, map dash bullets to the bullet glyph.
fn bulletize(text: &str) -> String {
    text.replace("**", "").replace('-', "\u{2022}")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(entries: &[(&str, EntryKind)]) -> TreeListing {
        TreeListing {
            tree: entries
                .iter()
                .map(|(path, kind)| TreeEntry::new(*path, *kind))
                .collect(),
            truncated: false,
        }
    }

    #[test]
    fn test_find_core_file_prefers_markers() {
        let l = listing(&[
            ("README.md", EntryKind::Blob),
            ("src", EntryKind::Tree),
            ("src/index.js", EntryKind::Blob),
        ]);
        assert_eq!(find_core_file(&l).map(|e| e.path.as_str()), Some("src/index.js"));
    }

    #[test]
    fn test_find_core_file_falls_back_to_first_blob() {
        let l = listing(&[("docs", EntryKind::Tree), ("lib/util.rb", EntryKind::Blob)]);
        assert_eq!(find_core_file(&l).map(|e| e.path.as_str()), Some("lib/util.rb"));
    }

    #[test]
    fn test_find_core_file_empty() {
        assert!(find_core_file(&TreeListing::default()).is_none());
        assert!(find_core_file(&listing(&[("src", EntryKind::Tree)])).is_none());
    }

    #[test]
    fn test_bulletize() {
        assert_eq!(
            bulletize("**Bold** - item"),
            "Bold \u{2022} item"
        );
    }
}
