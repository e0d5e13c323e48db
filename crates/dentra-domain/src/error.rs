use thiserror::Error;

/// Failures that prevent a whole document or collection from being decoded.
///
/// Malformed nested paid entries are not reported here; they are skipped
/// during decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON array of documents, found {0}")]
    NotACollection(&'static str),
    #[error("Invalid paid entry: {0}")]
    PaidEntry(String),
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
