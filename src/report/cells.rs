//! Row extraction: records to display strings.
//!
//! Every column has a fallback so that a record with nothing but an id still
//! produces a complete row. Both the HTML tables and the terminal listing are
//! built from these rows, so they always agree.

use serde::Serialize;

use crate::records::{ResultRecord, TaskRecord, Timing};

/// Glyph shown for an absent value.
pub const PLACEHOLDER: &str = "—";

/// Label for an LLM patch that is not available yet.
pub const COMING_SOON_LABEL: &str = "Coming soon";

/// `status.human` when the record has none.
pub const DEFAULT_HUMAN_STATUS: &str = "PENDING";

/// `comparison.llm_better` when the record has none.
pub const DEFAULT_COMPARISON: &str = "UNKNOWN";

/// Column headers of the task table.
pub const TASK_COLUMNS: [&str; 5] = ["Task", "Repository", "Human patch", "LLM patch", "LLM better"];

/// Column headers of the result table.
pub const RESULT_COLUMNS: [&str; 8] = [
    "Task",
    "Before",
    "After (human)",
    "After (LLM)",
    "Speedup (human)",
    "Speedup (LLM)",
    "LLM better",
    "Updated",
];

/// One rendered row of the task table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub human: String,
    pub llm: String,
    pub llm_better: String,
}

impl TaskRow {
    pub fn from_record(task: &TaskRecord) -> Self {
        let (repo, repo_url) = repo_cell(task);
        Self {
            id: task.id.clone(),
            repo,
            repo_url,
            human: or_default(task.status.human.as_deref(), DEFAULT_HUMAN_STATUS),
            llm: llm_availability(task),
            llm_better: or_default(task.comparison.llm_better.as_deref(), DEFAULT_COMPARISON),
        }
    }

    /// Cells in [`TASK_COLUMNS`] order.
    pub fn cells(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.repo.as_str(),
            self.human.as_str(),
            self.llm.as_str(),
            self.llm_better.as_str(),
        ]
    }
}

/// One rendered row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub id: String,
    pub before: String,
    pub after_human: String,
    pub after_llm: String,
    pub speedup_human: String,
    pub speedup_llm: String,
    pub llm_better: String,
    pub updated_at: String,
}

impl ResultRow {
    pub fn from_record(result: &ResultRecord) -> Self {
        Self {
            id: result.id.clone(),
            before: format_timing(result.before.as_ref()),
            after_human: format_timing(result.after_human.as_ref()),
            after_llm: format_timing(result.after_llm.as_ref()),
            speedup_human: format_number(result.speedup_human),
            speedup_llm: format_number(result.speedup_llm),
            llm_better: or_default(result.comparison.llm_better.as_deref(), DEFAULT_COMPARISON),
            updated_at: or_default(result.updated_at.as_deref(), PLACEHOLDER),
        }
    }

    /// Cells in [`RESULT_COLUMNS`] order.
    pub fn cells(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.before.as_str(),
            self.after_human.as_str(),
            self.after_llm.as_str(),
            self.speedup_human.as_str(),
            self.speedup_llm.as_str(),
            self.llm_better.as_str(),
            self.updated_at.as_str(),
        ]
    }
}

/// Build task rows in input order.
pub fn task_rows(tasks: &[TaskRecord]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::from_record).collect()
}

/// Build result rows in input order.
pub fn result_rows(results: &[ResultRecord]) -> Vec<ResultRow> {
    results.iter().map(ResultRow::from_record).collect()
}

/// The LLM column: "Coming soon" while either sentinel is set, else the raw
/// status.
pub fn llm_availability(task: &TaskRecord) -> String {
    if task.llm_coming_soon() {
        COMING_SOON_LABEL.to_string()
    } else {
        or_default(task.status.llm.as_deref(), PLACEHOLDER)
    }
}

/// `mean ± std`, the mean alone when std is missing, or the placeholder.
pub fn format_timing(timing: Option<&Timing>) -> String {
    match timing {
        Some(Timing {
            mean: Some(mean),
            std: Some(std),
        }) => format!("{} ± {}", mean, std),
        Some(Timing {
            mean: Some(mean),
            std: None,
        }) => mean.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

fn repo_cell(task: &TaskRecord) -> (String, Option<String>) {
    let Some(repo) = &task.repo else {
        return (PLACEHOLDER.to_string(), None);
    };

    let url = Some(repo.url.clone()).filter(|u| !u.is_empty());
    let slug = repo.slug();
    let label = if !slug.is_empty() {
        slug
    } else if let Some(url) = &url {
        url.clone()
    } else {
        PLACEHOLDER.to_string()
    };
    (label, url)
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
