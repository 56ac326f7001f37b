//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/repomap/config.toml)
//! 3. Project config (.repomap/config.toml)
//! 4. Environment variables (REPOMAP_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
