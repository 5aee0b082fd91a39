//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for box-drawn terminal tables
//!
//! # Example
//!
//! ```
//! use patchbench::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Silent);
//! ui.show_header("Checking environment");
//! ui.success("Docker looks good");
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PatchbenchTheme};

/// Trait for user interface interactions.
///
/// Status output respects the [`OutputMode`]; [`UserInterface::emit`] is for
/// data the user asked for (HTML, JSON, tables) and is never suppressed.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the label of a step about to run.
    fn show_step(&mut self, label: &str);

    /// Write requested data to stdout.
    fn emit(&mut self, data: &str);
}
