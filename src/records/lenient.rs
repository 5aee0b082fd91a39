//! Forgiving deserializers for optional record fields.
//!
//! Records come from an external pipeline and from hand-edited YAML. A missing,
//! `null`, or wrongly-typed optional field must not reject the whole record, so
//! every optional field goes through one of these helpers and degrades to
//! "absent" instead of failing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional string field. Numbers and booleans are kept as their text form.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Text field that is always present; anything unusable reads as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

/// Optional numeric field. Anything that is not a finite number is absent.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()))
}

/// Nested group that is always present; `null` or malformed means default.
pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(optional_group(deserializer)?.unwrap_or_default())
}

/// Nested group that may be missing altogether.
pub fn optional_group<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(group) => Ok(Some(group)),
        Err(e) => {
            tracing::debug!("Ignoring malformed record group: {}", e);
            Ok(None)
        }
    }
}
