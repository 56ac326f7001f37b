//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Mindmap builder constants
pub mod graph {
    /// Soft cap on emitted nodes per build call.
    ///
    /// Checked once per listing entry, so a single path may push the
    /// final count over by its own segment count.
    pub const DEFAULT_MAX_NODES: usize = 100;

    /// Maximum path depth shown in the mindmap
    pub const DEFAULT_MAX_DEPTH: usize = 3;
}

/// File analysis constants
pub mod analysis {
    /// Characters of file content embedded in a generation prompt
    pub const CONTENT_SAMPLE_CHARS: usize = 1000;
}

/// GitHub API constants
pub mod github {
    /// REST API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Contributors fetched per repository
    pub const CONTRIBUTOR_LIMIT: usize = 10;

    /// Default number of commits fetched
    pub const DEFAULT_COMMIT_LIMIT: usize = 10;

    /// Maximum retries for transient request failures
    pub const MAX_RETRIES: usize = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 500;
}

/// Report assembly constants
pub mod report {
    /// Commits shown in the recent-activity section
    pub const ACTIVITY_COMMITS: usize = 5;

    /// Branches listed in the governance section
    pub const BRANCH_LIMIT: usize = 10;

    /// Languages listed in the tech-stack section
    pub const LANGUAGE_LIMIT: usize = 5;

    /// Languages embedded in the roadmap prompt
    pub const ROADMAP_LANGUAGES: usize = 3;

    /// Characters of a commit message shown per activity line
    pub const COMMIT_MESSAGE_CHARS: usize = 50;

    /// Characters of a deep-dive analysis embedded in the report
    pub const DEEP_DIVE_CHARS: usize = 1000;

    /// Characters of the readme excerpt in the summary section
    pub const README_EXCERPT_CHARS: usize = 300;
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
}
