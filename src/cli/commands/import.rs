//! Import command implementation.
//!
//! The `patchbench import` command creates task YAML files from a CSV export.

use crate::cli::args::ImportArgs;
use crate::error::Result;
use crate::import::import_csv;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(args: ImportArgs) -> Self {
        Self { args }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let out = &self.args.out;
        let summary = import_csv(&self.args.csv, out)?;

        for row in &summary.skipped_rows {
            ui.warning(&format!("Skipped row {}: no instance_id", row));
        }
        ui.success(&format!(
            "Wrote {} task files to {}",
            summary.written.len(),
            out.display()
        ));

        Ok(CommandResult::success())
    }
}
