//! Architecture Pattern Classification
//!
//! A fixed-priority rule table evaluated over the full path set.
//! Rules are plain data: fragments that must all occur somewhere in
//! the listing, or of which any one suffices. First match wins, and
//! evaluation is pure, so the same listing always classifies the same
//! way.
//!
//! The classifier deliberately sees the unfiltered listing: ignore
//! rules and depth limits are display concerns and must not change a
//! repository's detected pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TreeListing;

/// Coarse architectural pattern of a repository layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchitecturePattern {
    Mvc,
    ComponentBased,
    LayeredJava,
    FullStackDecoupled,
    StandardModular,
    Generic,
}

impl ArchitecturePattern {
    /// Human-facing label used in reports and terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mvc => "MVC (Model-View-Controller) Pattern",
            Self::ComponentBased => "Component-based Architecture (Modern Web)",
            Self::LayeredJava => "Layered Enterprise Architecture (Java)",
            Self::FullStackDecoupled => "Full-Stack Decoupled Architecture",
            Self::StandardModular => "Standard Modular Structure",
            Self::Generic => "Generic Architecture",
        }
    }
}

impl fmt::Display for ArchitecturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classification rule.
///
/// Matches when every `all` fragment occurs in the path set (substring
/// containment) and, for a non-empty `any` list, at least one of its
/// fragments does too.
struct PatternRule {
    all: &'static [&'static str],
    any: &'static [&'static str],
    pattern: ArchitecturePattern,
}

impl PatternRule {
    fn matches(&self, paths: &[&str]) -> bool {
        let contains = |fragment: &str| paths.iter().any(|p| p.contains(fragment));
        self.all.iter().all(|f| contains(f))
            && (self.any.is_empty() || self.any.iter().any(|f| contains(f)))
    }
}

/// Priority-ordered rule table. Order is part of the contract:
/// reordering changes classifications.
const RULES: &[PatternRule] = &[
    PatternRule {
        all: &["models/", "views/", "controllers/"],
        any: &[],
        pattern: ArchitecturePattern::Mvc,
    },
    PatternRule {
        all: &[],
        any: &["src/components", "src/pages"],
        pattern: ArchitecturePattern::ComponentBased,
    },
    PatternRule {
        all: &["src/main/java"],
        any: &[],
        pattern: ArchitecturePattern::LayeredJava,
    },
    PatternRule {
        all: &["api/", "web/"],
        any: &[],
        pattern: ArchitecturePattern::FullStackDecoupled,
    },
];

/// Classify a repository layout from its full tree listing.
///
/// Missing or empty tree data yields [`ArchitecturePattern::Generic`];
/// a listing no rule claims falls through to
/// [`ArchitecturePattern::StandardModular`].
pub fn classify(listing: &TreeListing) -> ArchitecturePattern {
    if listing.tree.is_empty() {
        return ArchitecturePattern::Generic;
    }

    let paths: Vec<&str> = listing.paths().collect();
    RULES
        .iter()
        .find(|rule| rule.matches(&paths))
        .map(|rule| rule.pattern)
        .unwrap_or(ArchitecturePattern::StandardModular)
}

// =============================================================================
// Tests
// =============================================================================
