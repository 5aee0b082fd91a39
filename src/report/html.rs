//! HTML rendering of the report tables.
//!
//! Templates live in `templates/` and are compiled in by askama. All cell text
//! is escaped by the template engine.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::error::Result;

use super::cells::{ResultRow, TaskRow, RESULT_COLUMNS, TASK_COLUMNS};

#[derive(Template)]
#[template(path = "task_table.html")]
struct TaskTable<'a> {
    columns: &'a [&'a str],
    rows: &'a [TaskRow],
}

#[derive(Template)]
#[template(path = "result_table.html")]
struct ResultTable<'a> {
    columns: &'a [&'a str],
    rows: &'a [ResultRow],
}

#[derive(Template)]
#[template(path = "page.html")]
struct Page<'a> {
    title: &'a str,
    generated_at: String,
    tasks_table: &'a str,
    results_table: &'a str,
}

/// Render the task table.
pub fn render_task_table(rows: &[TaskRow]) -> Result<String> {
    let table = TaskTable {
        columns: &TASK_COLUMNS,
        rows,
    };
    Ok(table.render()?)
}

/// Render the result table.
pub fn render_result_table(rows: &[ResultRow]) -> Result<String> {
    let table = ResultTable {
        columns: &RESULT_COLUMNS,
        rows,
    };
    Ok(table.render()?)
}

/// Wrap pre-rendered tables in a standalone page.
pub fn render_page(
    title: &str,
    generated_at: DateTime<Utc>,
    tasks_table: &str,
    results_table: &str,
) -> Result<String> {
    let page = Page {
        title,
        generated_at: generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        tasks_table,
        results_table,
    };
    Ok(page.render()?)
}
