//! Path Classification
//!
//! Pure helpers deciding which tree paths appear in the mindmap and at
//! what depth. The ignore list and depth limit bound display complexity
//! only; the architecture classifier always inspects the full,
//! unfiltered listing.

/// Segments excluded from the mindmap: version-control metadata,
/// dependency installs, build output, coverage reports, editor config,
/// and generic asset/test directories.
pub const IGNORED_SEGMENTS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    ".vscode",
    "assets",
    "images",
    "test",
];

/// True if any slash-delimited segment exactly matches an ignored name.
pub fn is_ignored(path: &str) -> bool {
    path.split('/').any(|segment| IGNORED_SEGMENTS.contains(&segment))
}

/// Number of slash-delimited segments in a path.
pub fn depth_of(path: &str) -> usize {
    path.split('/').count()
}

/// Diagram-safe identifier for a path prefix: segments joined with `_`,
/// then characters hostile to Mermaid syntax (hyphens, dots,
/// whitespace) replaced with `_`.
pub fn sanitize_id(segments: &[&str]) -> String {
    segments
        .join("_")
        .chars()
        .map(|c| {
            if c == '-' || c == '.' || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored_matches_whole_segments() {
        assert!(is_ignored("node_modules/react/index.js"));
        assert!(is_ignored("src/test/fixtures.json"));
        assert!(is_ignored(".git"));

        // Substrings of a segment do not match
        assert!(!is_ignored("src/tests/fixtures.json"));
        assert!(!is_ignored("src/distance.rs"));
        assert!(!is_ignored("src/main.rs"));
    }

    #[test]
    fn test_depth_of() {
        assert_eq!(depth_of("README.md"), 1);
        assert_eq!(depth_of("src/main.rs"), 2);
        assert_eq!(depth_of("src/utils/helper.js"), 3);
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id(&["src", "app.js"]), "src_app_js");
        assert_eq!(sanitize_id(&["my-lib", "v1.2"]), "my_lib_v1_2");
        assert_eq!(sanitize_id(&["a b", "c"]), "a_b_c");
    }

    #[test]
    fn test_sanitize_is_prefix_stable() {
        // The id of a prefix is itself a prefix of the deeper id, so
        // parent/child ids line up across entries.
        let parent = sanitize_id(&["src", "utils"]);
        let child = sanitize_id(&["src", "utils", "helper.js"]);
        assert!(child.starts_with(&parent));
    }
}
