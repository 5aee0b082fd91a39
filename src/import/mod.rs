//! Import benchmark instances from a CSV export into task records.
//!
//! Each CSV row becomes `<out>/<id>.yml`. New tasks start with the LLM side
//! marked not-yet-available (`COMING_SOON` status, `PLACEHOLDER` image) and
//! default container commands the benchmark runner fills in.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PatchbenchError, Result};
use crate::records::{
    Comparison, DockerCommands, DockerSpec, Meta, MetricsSpec, Notes, ParseRegex, RepoRef,
    TaskRecord, TaskStatus, Workload, COMING_SOON, PLACEHOLDER_IMAGE,
};

/// `docker.commands.run_base` for imported tasks.
pub const RUN_BASE_TEMPLATE: &str = "docker run --rm --name bench_{id}_base --mount type=bind,src=<WORKLOAD_PY>,dst=/tmp/workload.py {base_image} /bin/bash -lc 'python /tmp/workload.py' 2>&1";

/// `docker.commands.run_human` for imported tasks.
pub const RUN_HUMAN_TEMPLATE: &str = "docker run --rm --platform linux/amd64 --name bench_{id}_human --mount type=bind,src=<WORKLOAD_PY>,dst=/tmp/workload.py {human_image} /bin/bash -lc 'chmod +x /perf.sh && git apply /tmp/patch.diff && /perf.sh' 2>&1";

/// `docker.commands.run_llm` until an LLM image exists.
pub const RUN_LLM_TEMPLATE: &str =
    "echo 'LLM image not available yet for {id}. Please fill docker.llm_image.'";

/// Regex the runner uses to find the mean in workload output.
pub const MEAN_REGEX: &str = r"(?i)\bMean:\s*([0-9.]+)";

/// Regex the runner uses to find the standard deviation in workload output.
pub const STD_REGEX: &str = r"(?i)(Std Dev|SD):\s*([0-9.]+)";

/// What an import run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Files written, in row order.
    pub written: Vec<PathBuf>,
    /// 1-based data row numbers skipped for lacking an id.
    pub skipped_rows: Vec<usize>,
}

/// Convert one CSV row (header name to value) into a task record.
///
/// Returns `None` when the row has neither `instance_id` nor `id`.
pub fn task_from_row(row: &HashMap<String, String>) -> Option<TaskRecord> {
    let id = non_empty(row, "instance_id").or_else(|| non_empty(row, "id"))?;
    let repo = row.get("repo").map(String::as_str).unwrap_or("");

    Some(TaskRecord {
        id: id.clone(),
        status: TaskStatus {
            human: Some(non_empty(row, "status").unwrap_or_else(|| "PENDING".to_string())),
            llm: Some(COMING_SOON.to_string()),
        },
        comparison: Comparison {
            llm_better: Some(COMING_SOON.to_string()),
        },
        repo: Some(repo_ref(repo, row)),
        workload: Some(Workload {
            language: "python".to_string(),
            code: text(row, "workload"),
        }),
        docker: DockerSpec {
            base_image: Some(text(row, "base_docker_image")),
            human_image: Some(text(row, "annotate_dockerhub_image")),
            llm_image: Some(PLACEHOLDER_IMAGE.to_string()),
            commands: Some(DockerCommands {
                run_base: RUN_BASE_TEMPLATE.to_string(),
                run_human: RUN_HUMAN_TEMPLATE.to_string(),
                run_llm: RUN_LLM_TEMPLATE.to_string(),
            }),
        },
        metrics: Some(MetricsSpec {
            reducer: "mean_std".to_string(),
            parse_regex: ParseRegex {
                mean: MEAN_REGEX.to_string(),
                std: STD_REGEX.to_string(),
            },
        }),
        notes: Some(Notes {
            user_notes: text(row, "notes"),
            mike_notes: text(row, "mike_notes"),
        }),
        meta: Some(Meta {
            num_covering_tests: row.get("num_covering_tests").cloned(),
        }),
    })
}

/// `org/name` splits on the first slash; anything else is a bare name.
fn repo_ref(repo: &str, row: &HashMap<String, String>) -> RepoRef {
    let (org, name, url) = match repo.split_once('/') {
        Some((org, name)) => (
            org.to_string(),
            name.to_string(),
            format!("https://github.com/{}", repo),
        ),
        None => (String::new(), repo.to_string(), String::new()),
    };

    RepoRef {
        org,
        name,
        url,
        pull_request: Some(text(row, "pull_request_link")),
        base_commit: Some(text(row, "base_commit")),
        created_at: Some(text(row, "created_at")),
        version: Some(text(row, "version")),
    }
}

fn non_empty(row: &HashMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}

fn text(row: &HashMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Read `csv_path` and write one YAML task file per row into `out_dir`.
pub fn import_csv(csv_path: &Path, out_dir: &Path) -> Result<ImportSummary> {
    let csv_error = |e: csv::Error| PatchbenchError::CsvError {
        path: csv_path.to_path_buf(),
        message: e.to_string(),
    };

    // Short rows are allowed; their trailing columns are simply absent.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .map_err(csv_error)?;
    fs::create_dir_all(out_dir)?;

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut summary = ImportSummary::default();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let row: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        let Some(task) = task_from_row(&row) else {
            tracing::warn!("Skipping CSV row {} without instance_id", index + 1);
            summary.skipped_rows.push(index + 1);
            continue;
        };

        let path = out_dir.join(format!("{}.yml", task.id));
        let yaml = serde_yaml::to_string(&task).map_err(|e| anyhow::anyhow!(e))?;
        fs::write(&path, yaml)?;
        tracing::debug!("Wrote {}", path.display());
        summary.written.push(path);
    }

    Ok(summary)
}
