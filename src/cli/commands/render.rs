//! Render command implementation.
//!
//! The `patchbench render` command turns the records under the data
//! directory into HTML tables.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::RenderArgs;
use crate::config::PatchbenchConfig;
use crate::error::Result;
use crate::records::RecordSet;
use crate::report::Report;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The render command implementation.
pub struct RenderCommand {
    project_root: PathBuf,
    config: PatchbenchConfig,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(project_root: &Path, config: PatchbenchConfig, args: RenderArgs) -> Self {
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

    /// `None` means stdout.
    fn output(&self) -> Option<PathBuf> {
        match &self.args.out {
            Some(out) if out.as_os_str() == "-" => None,
            Some(out) => Some(out.clone()),
            None => Some(self.config.site.output(&self.project_root)),
        }
    }

    fn render(&self, report: &Report) -> Result<String> {
        if self.args.fragment {
            report.render_fragment()
        } else {
            report.render_page(&self.config.site.title, chrono::Utc::now())
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let data_dir = self.data_dir();
        tracing::debug!("Loading records from {}", data_dir.display());

        let records = RecordSet::load(&data_dir)?;
        let report = Report::from_records(&records);
        let html = self.render(&report)?;

        match self.output() {
            None => ui.emit(&html),
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, &html)?;
                ui.success(&format!(
                    "Rendered {} tasks and {} results to {}",
                    report.tasks.len(),
                    report.results.len(),
                    path.display()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn seed(root: &Path) {
        let tasks = root.join("docs/_data/tasks");
        fs::create_dir_all(&tasks).unwrap();
        fs::write(
            tasks.join("pandas.yml"),
            "id: pandas-dev__pandas-38248\nstatus:\n  human: MERGED\n  llm: COMING_SOON\n",
        )
        .unwrap();
        fs::write(
            root.join("docs/_data/results.json"),
            r#"[{"id": "pandas-dev__pandas-38248", "before": {"mean": 2.5, "std": 0.1}}]"#,
        )
        .unwrap();
    }

    #[test]
    fn writes_page_to_configured_output() {
        let temp = TempDir::new().unwrap();
        seed(temp.path());
        let cmd = RenderCommand::new(
            temp.path(),
            PatchbenchConfig::default(),
            RenderArgs::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let html =
            fs::read_to_string(temp.path().join("docs/_includes/benchmark_tables.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Human vs. LLM patch performance"));
        assert!(html.contains("<td>Coming soon</td>"));
        assert!(html.contains("<td>2.5 ± 0.1</td>"));
        assert!(ui.has_success("Rendered 1 tasks and 1 results"));
    }

    #[test]
    fn fragment_to_stdout() {
        let temp = TempDir::new().unwrap();
        seed(temp.path());
        let args = RenderArgs {
            out: Some(PathBuf::from("-")),
            fragment: true,
            ..Default::default()
        };
        let cmd = RenderCommand::new(temp.path(), PatchbenchConfig::default(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let html = ui.emitted();
        assert!(html.starts_with("<table"));
        assert!(!html.contains("<!DOCTYPE"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn data_dir_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let args = RenderArgs {
            data_dir: Some(temp.path().join("empty")),
            out: Some(PathBuf::from("-")),
            fragment: true,
        };
        let cmd = RenderCommand::new(temp.path(), PatchbenchConfig::default(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.emitted().contains("No tasks yet."));
        assert!(ui.emitted().contains("No results yet."));
    }

    #[test]
    fn malformed_task_file_fails() {
        let temp = TempDir::new().unwrap();
        let tasks = temp.path().join("docs/_data/tasks");
        fs::create_dir_all(&tasks).unwrap();
        fs::write(tasks.join("bad.yml"), "id: [unclosed").unwrap();
        let cmd = RenderCommand::new(
            temp.path(),
            PatchbenchConfig::default(),
            RenderArgs::default(),
        );
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
