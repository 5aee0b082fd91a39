//! Error types for patchbench operations.
//!
//! This module defines [`PatchbenchError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PatchbenchError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PatchbenchError::Other`) for unexpected errors
//! - Missing optional record fields are never errors; they render as placeholders

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for patchbench operations.
#[derive(Debug, Error)]
pub enum PatchbenchError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A task or result record file could not be parsed.
    #[error("Failed to load records from {path}: {message}")]
    RecordLoadError { path: PathBuf, message: String },

    /// CSV input could not be read.
    #[error("Failed to read CSV {path}: {message}")]
    CsvError { path: PathBuf, message: String },

    /// HTML template rendering failed.
    #[error("Failed to render report: {0}")]
    RenderError(#[from] askama::Error),

    /// Shell command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for patchbench operations.
pub type Result<T> = std::result::Result<T, PatchbenchError>;
