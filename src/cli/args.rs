//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// patchbench - Human vs. LLM patch benchmark tooling.
#[derive(Debug, Parser)]
#[command(name = "patchbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .patchbench/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to site root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that Docker is ready for benchmarking (default if no command specified)
    Doctor,

    /// Render the task and result tables to HTML
    Render(RenderArgs),

    /// Show the task or result table in the terminal
    List(ListArgs),

    /// Create task records from a CSV export
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    /// Directory holding tasks/ and results.json (overrides site.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Output file, or `-` for stdout (overrides site.output)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit only the two tables instead of a full page
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show benchmark results instead of tasks
    #[arg(long)]
    pub results: bool,

    /// Print rows as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory holding tasks/ and results.json (overrides site.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// CSV file with one benchmark instance per row
    #[arg(long)]
    pub csv: PathBuf,

    /// Directory to write task YAML files into
    #[arg(long)]
    pub out: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
