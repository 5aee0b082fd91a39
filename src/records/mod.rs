//! Task and result records consumed by the report renderer.
//!
//! Records are produced by the external benchmark pipeline. This crate only
//! reads them (and, for the CSV importer, writes fresh task files); it never
//! rewrites existing records.

pub mod lenient;
pub mod result;
pub mod store;
pub mod task;

pub use result::{ResultRecord, Timing};
pub use store::{load_results, load_task_file, load_tasks, results_path, tasks_dir, RecordSet};
pub use task::{
    Comparison, DockerCommands, DockerSpec, Meta, MetricsSpec, Notes, ParseRegex, RepoRef,
    TaskRecord, TaskStatus, Workload,
};

/// `status.llm` value meaning the LLM patch is not yet available.
pub const COMING_SOON: &str = "COMING_SOON";

/// `docker.llm_image` value meaning no LLM image has been built yet.
pub const PLACEHOLDER_IMAGE: &str = "PLACEHOLDER";
