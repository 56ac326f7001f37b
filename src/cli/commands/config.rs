//! Config Command
//!
//! Show the merged effective configuration or the paths it is read
//! from. Secrets are excluded from serialization, so `show` output is
//! safe to paste.

use crate::config::ConfigLoader;
use crate::types::{RepoMapError, Result};

/// Print the merged effective configuration as TOML.
pub fn show() -> Result<()> {
    let config = ConfigLoader::load()?;
    let rendered = toml::to_string_pretty(&config)
        .map_err(|e| RepoMapError::Config(format!("failed to render config: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Print the configuration file locations.
pub fn path() {
    println!("Configuration paths:");
    println!();

    if let Some(global) = ConfigLoader::global_config_path() {
        let exists = if global.exists() { "\u{2713}" } else { "\u{2717}" };
        println!("  Global:  {} {}", exists, global.display());
    } else {
        println!("  Global:  (not available)");
    }

    let project = ConfigLoader::project_config_path();
    let exists = if project.exists() { "\u{2713}" } else { "\u{2717}" };
    println!("  Project: {} {}", exists, project.display());
}
