//! Doctor command implementation.
//!
//! The `patchbench doctor` command checks that Docker can run benchmark
//! containers on this machine.

use std::path::{Path, PathBuf};

use crate::config::PatchbenchConfig;
use crate::error::Result;
use crate::preflight::{Preflight, PreflightOutcome, ShellRunner};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    project_root: PathBuf,
    config: PatchbenchConfig,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(project_root: &Path, config: PatchbenchConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let preflight = Preflight::docker(&self.config.doctor);
        let quiet = matches!(ui.output_mode(), OutputMode::Quiet | OutputMode::Silent);
        let mut runner = ShellRunner::new(Some(self.project_root.clone())).quiet(quiet);

        ui.show_header("Checking Docker");

        match preflight.run(&mut runner, ui) {
            PreflightOutcome::Passed => Ok(CommandResult::success()),
            PreflightOutcome::Failed { exit_code, .. } => Ok(CommandResult::failure(exit_code)),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::DoctorConfig;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn config(version: &str, smoke: &str, disk: &str) -> PatchbenchConfig {
        PatchbenchConfig {
            doctor: DoctorConfig {
                version_command: version.into(),
                smoke_command: smoke.into(),
                disk_command: disk.into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn passing_checks_succeed() {
        let temp = TempDir::new().unwrap();
        let cmd = DoctorCommand::new(temp.path(), config("true", "true", "true"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["Checking Docker"]);
        assert_eq!(ui.steps().len(), 3);
        assert!(ui.has_success("ready to run benchmarks"));
    }

    #[test]
    fn failing_check_propagates_exit_code() {
        let temp = TempDir::new().unwrap();
        let cmd = DoctorCommand::new(temp.path(), config("exit 127", "true", "true"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 127);
        assert!(ui.has_error("not installed"));
        assert!(!ui.has_step("hello-world"));
    }
}
