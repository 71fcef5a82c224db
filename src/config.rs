//! # Configuration
//!
//! Application configuration loaded from `data/config.yaml`. Every section is
//! optional; a missing file yields defaults so the CLI flags alone are enough
//! to run.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub system: SystemConfig,
}

/// System-level settings.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SystemConfig {
    /// Workspace the sandbox is rooted at. `~` expands to the home directory.
    #[serde(default)]
    pub workspace_dir: Option<String>,
    /// Default tracing filter used when RUST_LOG is not set.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Loads the config file, or returns defaults when it does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        let config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {path}"))?;
        Ok(config)
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().into_owned();
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig =
            serde_yaml::from_str("system:\n  workspace_dir: /tmp/ws\n").unwrap();
        assert_eq!(config.system.workspace_dir.as_deref(), Some("/tmp/ws"));
        assert!(config.system.log_filter.is_none());
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.system.workspace_dir.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("/no/such/config.yaml").unwrap();
        assert!(config.system.workspace_dir.is_none());
    }

    #[test]
    fn test_tilde_expansion_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/srv/projects"), "/srv/projects");
        assert_eq!(expand_tilde("relative/dir"), "relative/dir");
    }
}
