//! Deserializers for document fields that are informational only.
//!
//! A field of an unexpected type degrades to `None` instead of rejecting the
//! whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through, numbers are rendered as text, anything else is `None`.
pub fn deserialize_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
