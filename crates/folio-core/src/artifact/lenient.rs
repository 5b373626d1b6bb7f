//! Serde helpers for fields whose JSON type is not guaranteed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON value into an optional string.
///
/// Strings pass through, `null` becomes `None`, and everything else keeps its
/// JSON text so that list-shaped fields can be decoded again later.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

/// Treats blank strings as absent.
pub fn present(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
