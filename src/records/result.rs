//! Result records: timing and speedup data for one task.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::task::Comparison;

/// Measured before/after timings for a task, as written to `results.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub before: Option<Timing>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub after_human: Option<Timing>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_group",
        skip_serializing_if = "Option::is_none"
    )]
    pub after_llm: Option<Timing>,

    /// `before.mean / after_human.mean`.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub speedup_human: Option<f64>,

    /// `before.mean / after_llm.mean`.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub speedup_llm: Option<f64>,

    #[serde(default, deserialize_with = "lenient::group")]
    pub comparison: Comparison,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl ResultRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Mean and standard deviation of a workload's run time, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(default, deserialize_with = "lenient::number")]
    pub mean: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub std: Option<f64>,
}

impl Timing {
    pub fn new(mean: f64, std: f64) -> Self {
        Self {
            mean: Some(mean),
            std: Some(std),
        }
    }
}
