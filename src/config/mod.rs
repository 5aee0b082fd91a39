//! Configuration loading for patchbench.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Configuration File Locations
//!
//! patchbench merges configuration in this order:
//! 1. Project config (`.patchbench/config.yml`)
//! 2. Local overrides (`.patchbench/config.local.yml`)
//!
//! Without either file every setting takes its default.
//!
//! # Example
//!
//! ```
//! use patchbench::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".patchbench");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "site:\n  title: Nightly").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.site.title, "Nightly");
//! assert_eq!(config.doctor.smoke_command, "docker run --rm hello-world");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{DoctorConfig, PatchbenchConfig, SiteConfig};
