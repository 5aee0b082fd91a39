//! patchbench - tooling for the human vs. LLM patch performance benchmark.
//!
//! patchbench checks that the local container runtime can run benchmark
//! images, renders the static task and result tables the benchmark site
//! publishes, and seeds task records from a CSV export.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`import`] - CSV to task record conversion
//! - [`preflight`] - Docker environment checks
//! - [`records`] - Task and result records and where they live on disk
//! - [`report`] - HTML table rendering
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use patchbench::records::{RecordSet, ResultRecord, Timing};
//! use patchbench::report::Report;
//!
//! let mut records = RecordSet::default();
//! let mut result = ResultRecord::new("pandas-dev__pandas-38248");
//! result.before = Some(Timing::new(2.5, 0.1));
//! records.results.push(result);
//!
//! let report = Report::from_records(&records);
//! assert_eq!(report.results[0].before, "2.5 ± 0.1");
//! assert_eq!(report.results[0].after_human, "—");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod preflight;
pub mod records;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{PatchbenchError, Result};
