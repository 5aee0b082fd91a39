//! Command runners for preflight steps.

use std::path::PathBuf;

use crate::error::Result;
use crate::shell::{execute_inherited, execute_quiet, CommandResult};

/// Runs one preflight command and reports how it exited.
pub trait StepRunner {
    fn run(&mut self, command: &str) -> Result<CommandResult>;
}

/// Runs commands through the shell.
///
/// Output goes straight to the terminal unless the runner is quiet, in which
/// case it is captured and dropped.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    cwd: Option<PathBuf>,
    quiet: bool,
}

impl ShellRunner {
    pub fn new(cwd: Option<PathBuf>) -> Self {
        Self { cwd, quiet: false }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl StepRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<CommandResult> {
        if self.quiet {
            execute_quiet(command, self.cwd.as_deref())
        } else {
            execute_inherited(command, self.cwd.as_deref())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::PatchbenchError;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Runner with canned exit codes; unlisted commands succeed.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedRunner {
        codes: HashMap<String, Option<i32>>,
        unspawnable: Vec<String>,
        ran: Vec<String>,
    }

    impl ScriptedRunner {
        pub(crate) fn new(codes: &[(&str, Option<i32>)]) -> Self {
            Self {
                codes: codes
                    .iter()
                    .map(|(cmd, code)| (cmd.to_string(), *code))
                    .collect(),
                ..Default::default()
            }
        }

        pub(crate) fn failing_to_spawn(mut self, command: &str) -> Self {
            self.unspawnable.push(command.to_string());
            self
        }

        pub(crate) fn ran(&self) -> &[String] {
            &self.ran
        }
    }

    impl StepRunner for ScriptedRunner {
        fn run(&mut self, command: &str) -> Result<CommandResult> {
            self.ran.push(command.to_string());
            if self.unspawnable.iter().any(|c| c == command) {
                return Err(PatchbenchError::CommandFailed {
                    command: command.to_string(),
                    code: None,
                });
            }
            let result = match self.codes.get(command) {
                Some(code) => {
                    CommandResult::failure(*code, String::new(), String::new(), Duration::ZERO)
                }
                None => CommandResult::success(String::new(), String::new(), Duration::ZERO),
            };
            Ok(result)
        }
    }

    #[cfg(unix)]
    #[test]
    fn shell_runner_reports_exit_code() {
        let mut runner = ShellRunner::default();
        assert!(runner.run("true").unwrap().success);

        let result = runner.run("exit 4").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(4));
    }

    #[cfg(unix)]
    #[test]
    fn quiet_runner_captures_output() {
        let mut runner = ShellRunner::default().quiet(true);
        let result = runner.run("echo hidden").unwrap();
        assert!(result.stdout.contains("hidden"));
    }
}
