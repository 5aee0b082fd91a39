//! List command implementation.
//!
//! The `patchbench list` command shows the task or result table in the
//! terminal, with the same cell values the HTML report uses.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::PatchbenchConfig;
use crate::error::Result;
use crate::records::RecordSet;
use crate::report::{Report, RESULT_COLUMNS, TASK_COLUMNS};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: PatchbenchConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config: PatchbenchConfig, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    fn data_dir(&self) -> PathBuf {
        match &self.args.data_dir {
            Some(dir) => dir.clone(),
            None => self.config.site.data_dir(&self.project_root),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let records = RecordSet::load(&self.data_dir())?;
        let report = Report::from_records(&records);

        if self.args.json {
            let json = if self.args.results {
                serde_json::to_string_pretty(&report.results)
            } else {
                serde_json::to_string_pretty(&report.tasks)
            }
            .map_err(|e| anyhow::anyhow!(e))?;
            ui.emit(&json);
            return Ok(CommandResult::success());
        }

        let (noun, table) = if self.args.results {
            let mut table = Table::new(&RESULT_COLUMNS);
            for row in &report.results {
                table.add_row(&row.cells());
            }
            ("results", table)
        } else {
            let mut table = Table::new(&TASK_COLUMNS);
            for row in &report.tasks {
                table.add_row(&row.cells());
            }
            ("tasks", table)
        };

        if table.is_empty() {
            ui.message(&format!("No {} yet.", noun));
            return Ok(CommandResult::success());
        }

        ui.emit(&table.render());
        ui.message(&format!("{} {}", table.row_count(), noun));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn seed(root: &Path) {
        let tasks = root.join("data/tasks");
        fs::create_dir_all(&tasks).unwrap();
        fs::write(
            tasks.join("a.yml"),
            "id: pandas-dev__pandas-38248\nrepo:\n  org: pandas-dev\n  name: pandas\n  url: https://github.com/pandas-dev/pandas\nstatus:\n  human: MERGED\n  llm: COMING_SOON\n",
        )
        .unwrap();
        fs::write(
            root.join("data/results.json"),
            r#"[{"id": "pandas-dev__pandas-38248", "speedup_human": 1.8}]"#,
        )
        .unwrap();
    }

    fn list(root: &Path, args: ListArgs) -> MockUI {
        let args = ListArgs {
            data_dir: Some(root.join("data")),
            ..args
        };
        let cmd = ListCommand::new(root, PatchbenchConfig::default(), args);
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
        ui
    }

    #[test]
    fn lists_tasks_as_table() {
        let temp = TempDir::new().unwrap();
        seed(temp.path());

        let ui = list(temp.path(), ListArgs::default());

        let out = ui.emitted();
        assert!(out.contains("┌"));
        assert!(out.contains("Human patch"));
        assert!(out.contains("pandas-dev/pandas"));
        assert!(out.contains("Coming soon"));
        assert!(ui.has_message("1 tasks"));
    }

    #[test]
    fn lists_results_as_table() {
        let temp = TempDir::new().unwrap();
        seed(temp.path());

        let ui = list(
            temp.path(),
            ListArgs {
                results: true,
                ..Default::default()
            },
        );

        let out = ui.emitted();
        assert!(out.contains("Speedup (human)"));
        assert!(out.contains("1.8"));
        assert!(out.contains("—"));
    }

    #[test]
    fn lists_tasks_as_json() {
        let temp = TempDir::new().unwrap();
        seed(temp.path());

        let ui = list(
            temp.path(),
            ListArgs {
                json: true,
                ..Default::default()
            },
        );

        let rows: serde_json::Value = serde_json::from_str(&ui.emitted()).unwrap();
        assert_eq!(rows[0]["id"], "pandas-dev__pandas-38248");
        assert_eq!(rows[0]["llm"], "Coming soon");
        assert_eq!(rows[0]["llm_better"], "UNKNOWN");
    }

    #[test]
    fn empty_data_dir_says_so() {
        let temp = TempDir::new().unwrap();

        let ui = list(temp.path(), ListArgs::default());

        assert!(ui.emitted().is_empty());
        assert!(ui.has_message("No tasks yet."));
    }
}
