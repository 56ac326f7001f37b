//! Mermaid Mindmap Builder
//!
//! Transforms a tree listing into an ordered sequence of Mermaid
//! flowchart statements: one declaration per unique path prefix, one
//! edge per unique parent/child relation, bounded by a soft node
//! budget.
//!
//! Statement order follows listing order and, within a path, segment
//! order, so identical input always yields byte-identical output.

use std::collections::HashSet;

use tracing::debug;

use super::path::{depth_of, is_ignored, sanitize_id};
use crate::constants::graph::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};
use crate::types::{EntryKind, TreeListing};

const ROOT_ID: &str = "root";

/// Node shape vocabulary understood by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Rectangle, used for the single root
    Root,
    /// Hexagon, directory-ish containers
    Directory,
    /// Rounded rectangle, files
    File,
}

impl NodeShape {
    /// Mermaid declaration statement for a node of this shape.
    fn declare(self, id: &str, label: &str) -> String {
        match self {
            Self::Root => format!("{id}[{label}]"),
            Self::Directory => format!("{id}{{{{{label}}}}}"),
            Self::File => format!("{id}([{label}])"),
        }
    }
}

/// A finished mindmap: ordered statements plus the counts the report
/// surface displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mindmap {
    pub statements: Vec<String>,
    pub node_count: usize,
    pub edge_count: usize,
}

impl Mindmap {
    /// Full Mermaid source, one statement per line.
    pub fn to_mermaid(&self) -> String {
        self.statements.join("\n")
    }
}

/// Builds mindmaps with a per-call node budget and depth limit.
///
/// Every build owns fresh node/edge sets; nothing leaks across calls,
/// so concurrent builds for different snapshots need no coordination.
#[derive(Debug, Clone, Copy)]
pub struct MindmapBuilder {
    max_nodes: usize,
    max_depth: usize,
}

impl Default for MindmapBuilder {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MindmapBuilder {
    pub fn new(max_nodes: usize, max_depth: usize) -> Self {
        Self {
            max_nodes,
            max_depth,
        }
    }

    /// Build the mindmap for a listing.
    ///
    /// An empty listing produces a single-node placeholder rather than
    /// an error; malformed entries (empty path, unknown kind) are
    /// skipped without counting against the budget.
    pub fn build(&self, listing: &TreeListing) -> Mindmap {
        if listing.tree.is_empty() {
            return Mindmap {
                statements: vec![
                    "graph LR".to_string(),
                    format!("{ROOT_ID}[Start Analysis]"),
                ],
                node_count: 1,
                edge_count: 0,
            };
        }

        let mut statements = vec![
            "graph LR".to_string(),
            format!("{ROOT_ID}[Repository]"),
            format!("style {ROOT_ID} fill:#f9f,stroke:#333,stroke-width:2px"),
        ];

        let mut nodes: HashSet<String> = HashSet::new();
        let mut edges: HashSet<String> = HashSet::new();
        let mut count = 0usize;

        for entry in &listing.tree {
            // Budget is checked once per entry, not per emitted node:
            // a single path may overshoot by its own segment count.
            if count > self.max_nodes {
                debug!(count, "node budget reached, truncating mindmap");
                break;
            }
            if entry.kind != EntryKind::Tree && entry.kind != EntryKind::Blob {
                continue;
            }
            if entry.path.is_empty() || is_ignored(&entry.path) {
                continue;
            }
            if depth_of(&entry.path) > self.max_depth {
                continue;
            }

            let segments: Vec<&str> = entry.path.split('/').collect();
            let mut parent = ROOT_ID.to_string();

            for (index, segment) in segments.iter().enumerate() {
                let id = sanitize_id(&segments[..=index]);

                if !nodes.contains(&id) {
                    let shape = if index == segments.len() - 1 && entry.kind == EntryKind::Blob {
                        NodeShape::File
                    } else {
                        NodeShape::Directory
                    };
                    statements.push(shape.declare(&id, segment));
                    nodes.insert(id.clone());
                    count += 1;
                }

                let edge = format!("{parent} --> {id}");
                if !edges.contains(&edge) {
                    statements.push(edge.clone());
                    edges.insert(edge);
                }

                parent = id;
            }
        }

        Mindmap {
            // The root declaration sits outside the seen-set
            node_count: count + 1,
            edge_count: edges.len(),
            statements,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TreeEntry;

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
    fn test_empty_listing_yields_placeholder() {
        let map = MindmapBuilder::default().build(&TreeListing::default());
        assert_eq!(map.statements, vec!["graph LR", "root[Start Analysis]"]);
        assert_eq!(map.node_count, 1);
        assert_eq!(map.edge_count, 0);
    }

    #[test]
    fn test_chain_and_branch_tree() {
        let map = MindmapBuilder::default().build(&listing(&[
            ("src/app.js", EntryKind::Blob),
            ("src/utils/helper.js", EntryKind::Blob),
        ]));

        let source = map.to_mermaid();
        assert!(source.contains("root[Repository]"));
        assert!(source.contains("src{{src}}"));
        assert!(source.contains("src_app_js([app.js])"));
        assert!(source.contains("src_utils{{utils}}"));
        assert!(source.contains("src_utils_helper_js([helper.js])"));

        assert!(source.contains("root --> src"));
        assert!(source.contains("src --> src_app_js"));
        assert!(source.contains("src --> src_utils"));
        assert!(source.contains("src_utils --> src_utils_helper_js"));

        // 4 declared nodes plus the root, connected as a tree
        assert_eq!(map.node_count, 5);
        assert_eq!(map.edge_count, 4);
    }

    #[test]
    fn test_shared_prefix_not_re_emitted() {
        let map = MindmapBuilder::default().build(&listing(&[
            ("src", EntryKind::Tree),
            ("src/a.js", EntryKind::Blob),
            ("src/b.js", EntryKind::Blob),
        ]));

        let src_decls = map
            .statements
            .iter()
            .filter(|s| s.as_str() == "src{{src}}")
            .count();
        assert_eq!(src_decls, 1);

        let root_edges = map
            .statements
            .iter()
            .filter(|s| s.as_str() == "root --> src")
            .count();
        assert_eq!(root_edges, 1);
    }

    #[test]
    fn test_last_segment_of_tree_entry_is_directory_shaped() {
        let map = MindmapBuilder::default().build(&listing(&[("src", EntryKind::Tree)]));
        assert!(map.to_mermaid().contains("src{{src}}"));
        assert!(!map.to_mermaid().contains("src([src])"));
    }

    #[test]
    fn test_ignored_and_deep_paths_are_dropped() {
        let map = MindmapBuilder::default().build(&listing(&[
            ("node_modules/react/index.js", EntryKind::Blob),
            ("a/b/c/d.js", EntryKind::Blob),
            ("src/main.js", EntryKind::Blob),
        ]));

        let source = map.to_mermaid();
        assert!(!source.contains("node_modules"));
        assert!(!source.contains("a_b_c_d_js"));
        assert!(source.contains("src_main_js([main.js])"));
    }

    #[test]
    fn test_malformed_entries_skipped_silently() {
        let map = MindmapBuilder::default().build(&listing(&[
            ("", EntryKind::Blob),
            ("vendor/lib", EntryKind::Other),
            ("src/main.js", EntryKind::Blob),
        ]));

        // Only root, src and main.js
        assert_eq!(map.node_count, 3);
    }

    #[test]
    fn test_budget_is_a_soft_cap() {
        // 3 three-segment paths against a budget of 4: the check runs
        // per entry, so the entry in flight completes its whole path.
        let map = MindmapBuilder::new(4, 3).build(&listing(&[
            ("a/b/c.js", EntryKind::Blob),
            ("d/e/f.js", EntryKind::Blob),
            ("g/h/i.js", EntryKind::Blob),
        ]));

        // First two entries emit 6 nodes (count 6 > 4), third is cut.
        assert_eq!(map.node_count, 7);
        assert!(!map.to_mermaid().contains("g_h_i_js"));
    }

    #[test]
    fn test_deterministic_output() {
        let input = listing(&[
            ("src/app.js", EntryKind::Blob),
            ("src/utils", EntryKind::Tree),
            ("src/utils/helper.js", EntryKind::Blob),
            ("README.md", EntryKind::Blob),
        ]);
        let builder = MindmapBuilder::default();
        assert_eq!(builder.build(&input), builder.build(&input));
    }

    #[test]
    fn test_truncated_listing_is_processed() {
        let mut input = listing(&[("src/main.js", EntryKind::Blob)]);
        input.truncated = true;
        let map = MindmapBuilder::default().build(&input);
        assert!(map.to_mermaid().contains("src_main_js"));
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use crate::types::TreeEntry;
    use proptest::prelude::*;

    fn arb_segment() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("src".to_string()),
            Just("lib".to_string()),
            Just("app.js".to_string()),
            Just("main-v2.py".to_string()),
            Just("node_modules".to_string()),
            Just("a".to_string()),
            Just("b".to_string()),
        ]
    }

    fn arb_entry() -> impl Strategy<Value = TreeEntry> {
        (
            proptest::collection::vec(arb_segment(), 1..5),
            prop_oneof![
                Just(EntryKind::Tree),
                Just(EntryKind::Blob),
                Just(EntryKind::Other),
            ],
        )
            .prop_map(|(segments, kind)| TreeEntry::new(segments.join("/"), kind))
    }

    fn arb_listing() -> impl Strategy<Value = TreeListing> {
        proptest::collection::vec(arb_entry(), 0..40).prop_map(|tree| TreeListing {
            tree,
            truncated: false,
        })
    }

    /// Statement classification for property checks: a node declaration
    /// is anything that is not the header, a style directive or an edge.
    fn declared_ids(map: &Mindmap) -> Vec<String> {
        map.statements
            .iter()
            .skip(1)
            .filter(|s| !s.starts_with("style ") && !s.contains(" --> "))
            .map(|s| {
                s.split(['[', '{', '('])
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn node_declarations_never_repeat(input in arb_listing()) {
            let map = MindmapBuilder::new(20, 3).build(&input);
            let ids = declared_ids(&map);
            let unique: std::collections::HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }

        #[test]
        fn edges_never_repeat(input in arb_listing()) {
            let map = MindmapBuilder::new(20, 3).build(&input);
            let edges: Vec<_> = map
                .statements
                .iter()
                .filter(|s| s.contains(" --> "))
                .collect();
            let unique: std::collections::HashSet<_> = edges.iter().collect();
            prop_assert_eq!(unique.len(), edges.len());
        }

        #[test]
        fn budget_overshoot_is_bounded(input in arb_listing()) {
            let max_nodes = 10;
            let max_depth = 3;
            let map = MindmapBuilder::new(max_nodes, max_depth).build(&input);
            // One entry of at most max_depth segments may land after the
            // final budget check, plus the root declaration.
            prop_assert!(map.node_count <= max_nodes + max_depth + 1);
        }

        #[test]
        fn build_is_deterministic(input in arb_listing()) {
            let builder = MindmapBuilder::new(20, 3);
            prop_assert_eq!(builder.build(&input), builder.build(&input));
        }

        #[test]
        fn ignored_paths_leave_no_trace(input in arb_listing()) {
            let map = MindmapBuilder::new(50, 4).build(&input);
            prop_assert!(!map.to_mermaid().contains("node_modules"));
        }
    }
}
