//! Configuration file discovery, loading, and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "bloxd.toml";

/// Walks up from `start` looking for the nearest directory containing `bloxd.toml`.
///
/// Returns `None` when no ancestor has one; a project without configuration
/// is linted with default settings.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).is_file() {
            debug!(root = %current.display(), "found project root");
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads and validates `bloxd.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&config_path).map_err(|source| {
        ConfigError::Unreadable {
            path: config_path.clone(),
            source,
        }
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `bloxd.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.trim().is_empty() {
        return Err(ConfigError::MissingKey("name"));
    }
    if config.project.extensions.iter().any(|e| e.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "project.extensions must not contain empty entries".to_string(),
        ));
    }
    if let Some(rule) = config
        .lint
        .deny
        .iter()
        .find(|rule| config.lint.allow.contains(rule))
    {
        return Err(ConfigError::Invalid(format!(
            "rule '{rule}' is both denied and allowed"
        )));
    }
    Ok(())
}
