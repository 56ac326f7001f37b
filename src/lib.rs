//! RepoMap - AI-Assisted Repository Structure Explorer
//!
//! Turns a GitHub repository's recursive tree listing into a Mermaid
//! mindmap, classifies its architecture pattern, and explains single
//! files through an optional text-generation capability backed by
//! deterministic heuristics.
//!
//! ## Core Transforms
//!
//! - **Mindmap**: deduplicated node/edge emission with ignore rules,
//!   a depth limit and a soft node budget
//! - **Architecture**: first-match rule table over the raw path set
//! - **Explanation**: AI-preferred, heuristic-guaranteed file analysis
//!
//! All three are pure with respect to their inputs; the surrounding
//! modules (GitHub client, provider, report, CLI) are orchestration.
//!
//! ## Quick Start
//!
//! ```ignore
//! use repomap::{MindmapBuilder, TreeListing};
//!
//! let listing: TreeListing = serde_json::from_str(&tree_json)?;
//! let mindmap = MindmapBuilder::default().build(&listing);
//! println!("{}", mindmap.to_mermaid());
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: path filtering and mindmap construction
//! - [`analyzer`]: architecture classification and file explanation
//! - [`ai`]: optional text-generation provider
//! - [`github`]: hosting API client
//! - [`report`]: Markdown report assembly

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod github;
pub mod graph;
pub mod report;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use analyzer::{AI_PREFIX, ArchitecturePattern, FileAnalyzer, classify};
pub use config::{Config, ConfigLoader, GithubConfig, GraphConfig, LlmConfig};
pub use graph::{Mindmap, MindmapBuilder, NodeShape};
pub use types::{
    EntryKind, ExplainMode, RepoMapError, RepoRef, ReportMode, Result, TreeEntry, TreeListing,
};

// =============================================================================
// Collaborator Re-exports
// =============================================================================

pub use ai::{OpenAiGenerator, SharedGenerator, TextGenerator, create_generator};
pub use github::GitHubClient;
pub use report::ReportBuilder;
