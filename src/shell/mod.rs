//! Shell command execution.

pub mod command;

pub use command::{execute, execute_inherited, execute_quiet, CommandOptions, CommandResult};
