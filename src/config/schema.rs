//! Configuration schema definitions for patchbench.
//!
//! This module contains the structs that map to `.patchbench/config.yml`.
//! Every field has a default, so an absent or empty file is a valid config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchbenchConfig {
    /// Report rendering settings
    pub site: SiteConfig,

    /// Environment preflight commands
    pub doctor: DoctorConfig,
}

/// Where the site's data lives and where the report goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page title for full-page output
    pub title: String,

    /// Directory holding `tasks/` and `results.json` (relative to project root)
    pub data_dir: PathBuf,

    /// Report output file (relative to project root)
    pub output: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Human vs. LLM patch performance".to_string(),
            data_dir: PathBuf::from("docs/_data"),
            output: PathBuf::from("docs/_includes/benchmark_tables.html"),
        }
    }
}

impl SiteConfig {
    /// Data directory resolved against the project root.
    pub fn data_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_dir)
    }

    /// Output path resolved against the project root.
    pub fn output(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }
}

/// Commands run by `patchbench doctor`, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Reports the installed container runtime version
    pub version_command: String,

    /// Runs a known-good container
    pub smoke_command: String,

    /// Reports free disk space
    pub disk_command: String,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            version_command: "docker --version".to_string(),
            smoke_command: "docker run --rm hello-world".to_string(),
            disk_command: "df -h".to_string(),
        }
    }
}
