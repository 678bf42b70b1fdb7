//! Configuration file discovery and loading.
//!
//! Configuration is optional. Without any file, [`RaikitConfig::default`]
//! applies.

use crate::config::merger::merge_configs;
use crate::config::schema::RaikitConfig;
use crate::error::{RaikitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.raikit/config.yml`)
/// 2. Local overrides (`.raikit/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .raikit/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .raikit/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(".raikit").join("config.yml")),
            project_local: existing(project_root.join(".raikit").join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RaikitConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into RaikitConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RaikitConfig> {
    if content.trim().is_empty() {
        return Ok(RaikitConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| RaikitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RaikitError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RaikitError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| RaikitError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<RaikitConfig> {
    serde_yaml::from_value(value).map_err(|e| RaikitError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project's config files; defaults when none exist.
pub fn load_merged_config(project_root: &Path) -> Result<RaikitConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    if existing.is_empty() {
        tracing::debug!("No config found under {}", project_root.display());
        return Ok(RaikitConfig::default());
    }

    let mut configs = Vec::new();
    for path in existing {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    from_value(
        merge_configs(&configs),
        &project_root.join(".raikit").join("config.yml"),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file (it must exist).
/// Otherwise, discovers and merges project config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RaikitConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
