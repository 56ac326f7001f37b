//! Core Domain Types

pub mod error;
pub mod utils;

pub use error::{RepoMapError, Result};
pub use utils::truncate_chars;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

// =============================================================================
// Tree Listing
// =============================================================================

/// Entry classification in a recursive tree listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Directory
    Tree,
    /// File
    Blob,
    /// Anything else the API may return (submodule commits, future kinds)
    #[serde(other)]
    Other,
}

/// One record from the hosting API's recursive tree listing.
///
/// Owned by the caller; the analysis core only reads it. `sha` is
/// carried for completeness but unused by the transforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub sha: String,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
            sha: String::new(),
        }
    }
}

/// Recursive tree listing for one repository reference.
///
/// The API caps very large repositories and sets `truncated`; consumers
/// treat such a listing as partial and carry on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

impl TreeListing {
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All paths in listing order, unfiltered.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.tree.iter().map(|e| e.path.as_str())
    }
}

// =============================================================================
// Modes
// =============================================================================

/// Audience for a single-file explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplainMode {
    #[default]
    Beginner,
    Advanced,
}

impl fmt::Display for ExplainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainMode::Beginner => write!(f, "beginner"),
            ExplainMode::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ExplainMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ExplainMode::Beginner),
            "advanced" => Ok(ExplainMode::Advanced),
            _ => Err(format!(
                "Unknown explain mode: {}. Valid values: beginner, advanced",
                s
            )),
        }
    }
}

/// Depth of the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Overview, features and tech stack
    #[default]
    Basic,
    /// Architecture, activity, branches and a core-module deep dive
    Advanced,
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Basic => write!(f, "basic"),
            ReportMode::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(ReportMode::Basic),
            "advanced" => Ok(ReportMode::Advanced),
            _ => Err(format!(
                "Unknown report mode: {}. Valid values: basic, advanced",
                s
            )),
        }
    }
}

// =============================================================================
// Repository Reference
// =============================================================================

/// A repository identified by owner and name.
///
/// Parses from `owner/name` or a full `https://github.com/owner/name`
/// URL (extra path segments are ignored).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = RepoMapError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RepoMapError::InvalidRepoRef(s.to_string());

        if s.contains("://") {
            let url = Url::parse(s).map_err(|_| invalid())?;
            if url.host_str() != Some("github.com") {
                return Err(invalid());
            }
            let mut segments = url
                .path_segments()
                .ok_or_else(invalid)?
                .filter(|seg| !seg.is_empty());
            let owner = segments.next().ok_or_else(invalid)?;
            let name = segments.next().ok_or_else(invalid)?;
            let name = name.strip_suffix(".git").unwrap_or(name);
            return Ok(Self::new(owner, name));
        }

        let mut parts = s.splitn(2, '/');
        match (parts.next(), parts.next()) {
            (Some(owner), Some(name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(invalid()),
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
    fn test_entry_kind_deserialize() {
        let entry: TreeEntry =
            serde_json::from_str(r#"{"path": "src/main.rs", "type": "blob", "sha": "abc"}"#)
                .unwrap();
        assert_eq!(entry.kind, EntryKind::Blob);

        let entry: TreeEntry =
            serde_json::from_str(r#"{"path": "src", "type": "tree"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Tree);
        assert!(entry.sha.is_empty());

        // Submodule commits and future kinds collapse into Other
        let entry: TreeEntry =
            serde_json::from_str(r#"{"path": "vendor/lib", "type": "commit"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Other);
    }

    #[test]
    fn test_listing_tolerates_missing_fields() {
        let listing: TreeListing = serde_json::from_str(r#"{}"#).unwrap();
        assert!(listing.is_empty());
        assert!(!listing.truncated);

        let listing: TreeListing =
            serde_json::from_str(r#"{"tree": [], "truncated": true}"#).unwrap();
        assert!(listing.truncated);
    }

    #[test]
    fn test_repo_ref_from_short_form() {
        let repo: RepoRef = "rust-lang/cargo".parse().unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "cargo");
        assert_eq!(repo.full_name(), "rust-lang/cargo");
    }

    #[test]
    fn test_repo_ref_from_url() {
        let repo: RepoRef = "https://github.com/rust-lang/cargo".parse().unwrap();
        assert_eq!(repo, RepoRef::new("rust-lang", "cargo"));

        let repo: RepoRef = "https://github.com/rust-lang/cargo.git".parse().unwrap();
        assert_eq!(repo.name, "cargo");

        // Extra segments (tree/main/...) are ignored
        let repo: RepoRef = "https://github.com/rust-lang/cargo/tree/master/src"
            .parse()
            .unwrap();
        assert_eq!(repo.name, "cargo");
    }

    #[test]
    fn test_repo_ref_rejects_garbage() {
        assert!("just-a-name".parse::<RepoRef>().is_err());
        assert!("".parse::<RepoRef>().is_err());
        assert!("owner/".parse::<RepoRef>().is_err());
        assert!("https://gitlab.com/a/b".parse::<RepoRef>().is_err());
    }

    #[test]
    fn test_mode_round_trip() {
        assert_eq!("advanced".parse::<ExplainMode>().unwrap(), ExplainMode::Advanced);
        assert_eq!(ExplainMode::Beginner.to_string(), "beginner");
        assert!("expert".parse::<ExplainMode>().is_err());

        assert_eq!("basic".parse::<ReportMode>().unwrap(), ReportMode::Basic);
        assert_eq!(ReportMode::Advanced.to_string(), "advanced");
    }
}
