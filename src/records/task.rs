//! Task records: one benchmarked issue/patch pair with its metadata.
//!
//! Field order here is the key order of imported YAML files.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{COMING_SOON, PLACEHOLDER_IMAGE};

/// A benchmarked task as stored in `tasks/<id>.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier, e.g. `pandas-dev__pandas-38248`.
    pub id: String,

    #[serde(default, deserialize_with = "lenient::group")]
    pub status: TaskStatus,

    #[serde(default, deserialize_with = "lenient::group")]
    pub comparison: Comparison,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub repo: Option<RepoRef>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub workload: Option<Workload>,

    #[serde(default, deserialize_with = "lenient::group")]
    pub docker: DockerSpec,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub metrics: Option<MetricsSpec>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Notes>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta: Option<Meta>,
}

impl TaskRecord {
    /// Create a record with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Whether the LLM patch is not yet available.
    ///
    /// The placeholder image wins over any status value.
    pub fn llm_coming_soon(&self) -> bool {
        self.status.llm.as_deref() == Some(COMING_SOON)
            || self.docker.llm_image.as_deref() == Some(PLACEHOLDER_IMAGE)
    }
}

/// Patch status for each side of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub human: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub llm: Option<String>,
}

/// Outcome of comparing the LLM patch against the human one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// `YES`, `NO`, `TIE`, `COMING_SOON` or `UNKNOWN` in practice.
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub llm_better: Option<String>,
}

/// Upstream repository of the task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoRef {
    #[serde(default, deserialize_with = "lenient::text")]
    pub org: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pull_request: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_commit: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
}

impl RepoRef {
    /// `org/name`, or just the name when there is no org.
    pub fn slug(&self) -> String {
        if self.org.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.org, self.name)
        }
    }
}

/// Workload script run inside each container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    #[serde(default, deserialize_with = "lenient::text")]
    pub language: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub code: String,
}

/// Container images and run commands for each variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockerSpec {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_image: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_image: Option<String>,

    /// `PLACEHOLDER` until an LLM image has been built.
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub llm_image: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub commands: Option<DockerCommands>,
}

/// Command templates. `{id}`, `{base_image}`, `{human_image}`, `{llm_image}`
/// and `<WORKLOAD_PY>` are substituted by the benchmark runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockerCommands {
    #[serde(default, deserialize_with = "lenient::text")]
    pub run_base: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub run_human: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub run_llm: String,
}

/// How the runner reduces workload output to a timing summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSpec {
    #[serde(default, deserialize_with = "lenient::text")]
    pub reducer: String,
    #[serde(default, deserialize_with = "lenient::group")]
    pub parse_regex: ParseRegex,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseRegex {
    #[serde(default, deserialize_with = "lenient::text")]
    pub mean: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub std: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    #[serde(default, deserialize_with = "lenient::text")]
    pub user_notes: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mike_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "lenient::string")]
    pub num_covering_tests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_parses() {
        let task: TaskRecord = serde_yaml::from_str("id: django__django-1").unwrap();
        assert_eq!(task.id, "django__django-1");
        assert_eq!(task.status, TaskStatus::default());
        assert!(task.repo.is_none());
    }

    #[test]
    fn mistyped_nested_fields_do_not_drop_their_group() {
        let task: TaskRecord = serde_yaml::from_str(
            "id: t\nrepo: {org: sympy, name: sympy, version: 1.1, url: [x]}\n\
             workload: {language: python, code: 42}\n\
             notes: {user_notes: null, mike_notes: ok}\n\
             metrics: {reducer: mean_std, parse_regex: 7}\n",
        )
        .unwrap();

        let repo = task.repo.unwrap();
        assert_eq!(repo.slug(), "sympy/sympy");
        assert_eq!(repo.url, "");
        assert_eq!(repo.version.as_deref(), Some("1.1"));
        assert_eq!(task.workload.unwrap().code, "42");
        let notes = task.notes.unwrap();
        assert_eq!(notes.user_notes, "");
        assert_eq!(notes.mike_notes, "ok");
        let metrics = task.metrics.unwrap();
        assert_eq!(metrics.reducer, "mean_std");
        assert_eq!(metrics.parse_regex, ParseRegex::default());
    }

    #[test]
    fn id_is_required() {
        let result: Result<TaskRecord, _> = serde_yaml::from_str("status: {human: MERGED}");
        assert!(result.is_err());
    }

    #[test]
    fn full_record_parses() {
        let yaml = r#"
id: pandas-dev__pandas-38248
status:
  human: MERGED
  llm: COMING_SOON
comparison:
  llm_better: COMING_SOON
repo:
  org: pandas-dev
  name: pandas
  url: https://github.com/pandas-dev/pandas
  pull_request: https://github.com/pandas-dev/pandas/pull/38248
docker:
  base_image: bench/pandas:base
  human_image: bench/pandas:human
  llm_image: PLACEHOLDER
  commands:
    run_base: docker run {base_image}
    run_human: docker run {human_image}
    run_llm: echo missing
meta:
  num_covering_tests: 12
"#;
        let task: TaskRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.status.human.as_deref(), Some("MERGED"));
        let repo = task.repo.as_ref().unwrap();
        assert_eq!(repo.slug(), "pandas-dev/pandas");
        assert_eq!(
            repo.pull_request.as_deref(),
            Some("https://github.com/pandas-dev/pandas/pull/38248")
        );
        assert_eq!(task.docker.llm_image.as_deref(), Some("PLACEHOLDER"));
        assert_eq!(
            task.docker.commands.as_ref().unwrap().run_llm,
            "echo missing"
        );
        assert_eq!(
            task.meta.unwrap().num_covering_tests.as_deref(),
            Some("12")
        );
    }

    #[test]
    fn coming_soon_from_status() {
        let mut task = TaskRecord::new("t");
        task.status.llm = Some("COMING_SOON".into());
        assert!(task.llm_coming_soon());
    }

    #[test]
    fn coming_soon_from_placeholder_image_overrides_status() {
        let mut task = TaskRecord::new("t");
        task.status.llm = Some("DONE".into());
        task.docker.llm_image = Some("PLACEHOLDER".into());
        assert!(task.llm_coming_soon());
    }

    #[test]
    fn available_when_neither_sentinel() {
        let mut task = TaskRecord::new("t");
        task.status.llm = Some("DONE".into());
        task.docker.llm_image = Some("bench/pandas:llm".into());
        assert!(!task.llm_coming_soon());
    }

    #[test]
    fn slug_without_org() {
        let repo = RepoRef {
            name: "sympy".into(),
            ..Default::default()
        };
        assert_eq!(repo.slug(), "sympy");
    }

    #[test]
    fn serialization_skips_absent_groups() {
        let yaml = serde_yaml::to_string(&TaskRecord::new("t")).unwrap();
        assert!(yaml.contains("id: t"));
        assert!(!yaml.contains("repo"));
        assert!(!yaml.contains("meta"));
    }
}
