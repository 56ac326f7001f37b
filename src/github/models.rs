//! GitHub REST API Response Models
//!
//! Only the fields the report and mindmap consume; everything else in
//! the API responses is ignored. Shape checks happen through serde
//! defaults: absent counts read as zero rather than failing.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository metadata subset.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub default_branch: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub login: String,
    #[serde(default)]
    pub contributions: u64,
}

/// One language with its byte count, as derived from the languages
/// endpoint. Ordered by size descending (name ascending on ties) so
/// "top languages" is deterministic regardless of JSON key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_tolerates_missing_counts() {
        let repo: Repository = serde_json::from_str(
            r#"{"name": "demo", "full_name": "acme/demo", "default_branch": "main"}"#,
        )
        .unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert!(repo.description.is_none());
    }

    #[test]
    fn test_commit_parsing() {
        let commit: Commit = serde_json::from_str(
            r#"{
                "sha": "abc123",
                "commit": {
                    "message": "fix: edge dedup",
                    "author": {"name": "Dev", "date": "2026-01-15T10:30:00Z"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(commit.commit.author.name, "Dev");
        assert_eq!(commit.commit.message, "fix: edge dedup");
    }
}
