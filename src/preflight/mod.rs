//! Environment preflight checks.
//!
//! Verifies that the container runtime the benchmark depends on is usable
//! before anything heavier is attempted. Steps run strictly in order; the
//! first failing step ends the run and its exit code becomes the process exit
//! code.

pub mod runner;

use crate::config::DoctorConfig;
use crate::ui::UserInterface;

pub use runner::{ShellRunner, StepRunner};

/// One labelled command in the preflight sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightStep {
    /// Shown before the command runs.
    pub label: String,
    /// Shell command line.
    pub command: String,
    /// Shown when the command exits non-zero.
    pub failure_message: String,
}

impl PreflightStep {
    pub fn new(label: &str, command: &str, failure_message: &str) -> Self {
        Self {
            label: label.to_string(),
            command: command.to_string(),
            failure_message: failure_message.to_string(),
        }
    }
}

/// How a preflight run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightOutcome {
    /// Every step exited zero.
    Passed,
    /// A step failed; later steps were not run.
    Failed {
        /// Label of the failing step.
        step: String,
        /// Non-zero code to exit with.
        exit_code: i32,
    },
}

impl PreflightOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed { exit_code, .. } => *exit_code,
        }
    }
}

/// Message printed when every step passed.
pub const SUCCESS_MESSAGE: &str = "Docker looks good. You're ready to run benchmarks.";

/// An ordered, fail-fast sequence of checks.
#[derive(Debug, Clone)]
pub struct Preflight {
    steps: Vec<PreflightStep>,
}

impl Preflight {
    pub fn new(steps: Vec<PreflightStep>) -> Self {
        Self { steps }
    }

    /// The container runtime checks: version, smoke test, disk space.
    pub fn docker(config: &DoctorConfig) -> Self {
        Self::new(vec![
            PreflightStep::new(
                "Docker version",
                &config.version_command,
                "Docker is not installed or not on PATH",
            ),
            PreflightStep::new(
                "Running hello-world container",
                &config.smoke_command,
                "Docker hello-world failed",
            ),
            PreflightStep::new("Disk space", &config.disk_command, "Disk space check failed"),
        ])
    }

    pub fn steps(&self) -> &[PreflightStep] {
        &self.steps
    }

    /// Run every step in order, stopping at the first failure.
    pub fn run(&self, runner: &mut dyn StepRunner, ui: &mut dyn UserInterface) -> PreflightOutcome {
        for step in &self.steps {
            ui.show_step(&step.label);
            if ui.output_mode().shows_commands() {
                ui.message(&format!("$ {}", step.command));
            }
            tracing::debug!("Preflight step '{}': {}", step.label, step.command);

            let exit_code = match runner.run(&step.command) {
                Ok(result) if result.success => continue,
                Ok(result) => nonzero(result.exit_code),
                Err(e) => {
                    tracing::debug!("Preflight step '{}' could not start: {}", step.label, e);
                    1
                }
            };

            ui.error(&step.failure_message);
            tracing::info!(
                "Preflight stopped at '{}' with exit code {}",
                step.label,
                exit_code
            );
            return PreflightOutcome::Failed {
                step: step.label.clone(),
                exit_code,
            };
        }

        ui.success(SUCCESS_MESSAGE);
        PreflightOutcome::Passed
    }
}

// A failure must never exit 0, even if the process reported no code.
fn nonzero(code: Option<i32>) -> i32 {
    match code {
        Some(code) if code != 0 => code,
        _ => 1,
    }
}
