//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::PatchbenchConfig;
use crate::error::{PatchbenchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project config directory.
pub const CONFIG_DIR: &str = ".patchbench";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.patchbench/config.yml`)
/// 2. Local overrides (`.patchbench/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .patchbench/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .patchbench/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
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

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.patchbench` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PatchbenchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PatchbenchError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Null);
    }

    serde_yaml::from_str(&content).map_err(|e| PatchbenchError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<PatchbenchConfig> {
    if value.is_null() {
        return Ok(PatchbenchConfig::default());
    }
    serde_yaml::from_value(value).map_err(|e| PatchbenchError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file without merging.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PatchbenchConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Load and merge the project's config files.
///
/// A project without any config file gets the defaults.
pub fn load_merged_config(project_root: &Path) -> Result<PatchbenchConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    if existing.is_empty() {
        tracing::debug!(
            "No config under {}, using defaults",
            project_root.join(CONFIG_DIR).display()
        );
        return Ok(PatchbenchConfig::default());
    }

    let mut configs = Vec::new();
    for path in &existing {
        tracing::debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    from_value(merged, existing[0])
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<PatchbenchConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
