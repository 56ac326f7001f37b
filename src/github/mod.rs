//! GitHub API Integration
//!
//! Thin async client over the REST v3 endpoints the mindmap and report
//! need, plus the serde models for their responses. The recursive tree
//! listing itself lives in [`crate::types`] because the analysis core
//! consumes it directly.

mod client;
mod models;

pub use client::GitHubClient;
pub use models::{Branch, Commit, Contributor, Language, Repository};
