//! Static report rendering.
//!
//! Turns task and result records into one HTML table per collection. Rows
//! follow input order; nothing is sorted, filtered or aggregated.
//!
//! # Example
//!
//! ```
//! use patchbench::records::{RecordSet, TaskRecord};
//! use patchbench::report::Report;
//!
//! let mut records = RecordSet::default();
//! let mut task = TaskRecord::new("pandas-dev__pandas-38248");
//! task.status.human = Some("MERGED".to_string());
//! task.status.llm = Some("COMING_SOON".to_string());
//! records.tasks.push(task);
//!
//! let html = Report::from_records(&records).render_fragment().unwrap();
//! assert!(html.contains("<td>Coming soon</td>"));
//! ```

pub mod cells;
pub mod html;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::records::RecordSet;

pub use cells::{
    format_number, format_timing, llm_availability, result_rows, task_rows, ResultRow, TaskRow,
    COMING_SOON_LABEL, DEFAULT_COMPARISON, DEFAULT_HUMAN_STATUS, PLACEHOLDER, RESULT_COLUMNS,
    TASK_COLUMNS,
};

/// Rows for both tables, ready to render.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub tasks: Vec<TaskRow>,
    pub results: Vec<ResultRow>,
}

impl Report {
    pub fn from_records(records: &RecordSet) -> Self {
        Self {
            tasks: task_rows(&records.tasks),
            results: result_rows(&records.results),
        }
    }

    /// Both tables, for embedding in a larger page.
    pub fn render_fragment(&self) -> Result<String> {
        let tasks = html::render_task_table(&self.tasks)?;
        let results = html::render_result_table(&self.results)?;
        Ok(format!("{}\n{}\n", tasks, results))
    }

    /// A complete HTML document.
    pub fn render_page(&self, title: &str, generated_at: DateTime<Utc>) -> Result<String> {
        let tasks = html::render_task_table(&self.tasks)?;
        let results = html::render_result_table(&self.results)?;
        let mut page = html::render_page(title, generated_at, &tasks, &results)?;
        page.push('\n');
        Ok(page)
    }
}
