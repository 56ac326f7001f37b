//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/repomap/config.toml)
//! 3. Project config (.repomap/config.toml)
//! 4. Environment variables (REPOMAP_* prefix)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use super::types::Config;
use crate::types::{RepoMapError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → global → project → env vars.
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("loading global config from {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("loading project config from {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. REPOMAP_LLM_MODEL -> llm.model
        figment = figment.merge(Env::prefixed("REPOMAP_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| RepoMapError::Config(format!("configuration error: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| RepoMapError::Config(format!("configuration error: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Path to the global config file, platform-dependent.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "repomap").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Path to the project config file, relative to the working
    /// directory.
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".repomap/config.toml")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[graph]
max_nodes = 25

[llm]
model = "gpt-4o"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.graph.max_nodes, 25);
        assert_eq!(config.llm.model, "gpt-4o");
        // Untouched values keep their defaults
        assert_eq!(config.graph.max_depth, 3);
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[llm]
temperature = 9.0
"#
        )
        .unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConfigLoader::load_from_file(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.graph.max_nodes, 100);
    }
}
