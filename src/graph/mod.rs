//! Structure Graph
//!
//! Pure transforms from a recursive tree listing to a Mermaid mindmap:
//! path filtering ([`path`]) and statement emission ([`MindmapBuilder`]).
//! Nothing here performs I/O or keeps state across calls.

mod mindmap;
pub mod path;

pub use mindmap::{Mindmap, MindmapBuilder, NodeShape};
