//! Loading records from the site's data directory.
//!
//! Layout:
//!
//! ```text
//! <data_dir>/
//!   tasks/<id>.yml     one task record per file
//!   results.json       array of result records
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{PatchbenchError, Result};

use super::result::ResultRecord;
use super::task::TaskRecord;

/// Task and result records read from a data directory.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub tasks: Vec<TaskRecord>,
    pub results: Vec<ResultRecord>,
}

impl RecordSet {
    /// Load both collections from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Ok(Self {
            tasks: load_tasks(data_dir)?,
            results: load_results(data_dir)?,
        })
    }
}

/// Directory holding per-task YAML files.
pub fn tasks_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("tasks")
}

/// Path of the results file.
pub fn results_path(data_dir: &Path) -> PathBuf {
    data_dir.join("results.json")
}

/// Load every task file in file-name order.
///
/// A missing directory yields no tasks. Empty documents are skipped.
pub fn load_tasks(data_dir: &Path) -> Result<Vec<TaskRecord>> {
    let dir = tasks_dir(data_dir);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No tasks directory at {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_yaml(p))
        .collect();
    paths.sort();

    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        if let Some(task) = load_task_file(&path)? {
            tasks.push(task);
        }
    }

    tracing::debug!("Loaded {} tasks from {}", tasks.len(), dir.display());
    Ok(tasks)
}

/// Parse a single task file. Returns `None` for an empty document.
pub fn load_task_file(path: &Path) -> Result<Option<TaskRecord>> {
    let content = fs::read_to_string(path)?;
    if is_blank_document(&content) {
        tracing::debug!("Skipping empty task file {}", path.display());
        return Ok(None);
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| PatchbenchError::RecordLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        tracing::debug!("Skipping empty task file {}", path.display());
        return Ok(None);
    }

    serde_yaml::from_value(value)
        .map(Some)
        .map_err(|e| PatchbenchError::RecordLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load the results array.
///
/// A missing file yields no results. An unparseable file is reported and
/// treated as empty, so the report still renders the task table.
pub fn load_results(data_dir: &Path) -> Result<Vec<ResultRecord>> {
    let path = results_path(data_dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No results file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Vec<ResultRecord>>(&content) {
        Ok(results) => {
            tracing::debug!("Loaded {} results from {}", results.len(), path.display());
            Ok(results)
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable results file {}: {}", path.display(), e);
            Ok(Vec::new())
        }
    }
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}
