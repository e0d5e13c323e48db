//! Reads exported document collections from disk.

use std::{fs, path::Path};

use dentra_domain::{DecodeError, DocumentQuery};
use serde_json::Value;

use crate::errors::DashboardError;

/// Loads a JSON array of documents and applies `query` to it.
pub fn load_collection(path: &Path, query: &DocumentQuery) -> Result<Value, DashboardError> {
    let data = fs::read_to_string(path)?;
    let documents = match serde_json::from_str::<Value>(&data)? {
        Value::Array(documents) => documents,
        Value::Object(_) => return Err(DecodeError::NotACollection("an object").into()),
        _ => return Err(DecodeError::NotACollection("a scalar").into()),
    };
    let total = documents.len();
    let selected = query.apply(documents);
    tracing::debug!(path = %path.display(), total, selected = selected.len(), "collection loaded");
    Ok(Value::Array(selected))
}

/// Loads existing business codes; elements are code strings or documents carrying `field`.
pub fn load_codes(path: &Path, field: &str) -> Result<Vec<String>, DashboardError> {
    let Value::Array(documents) = load_collection(path, &DocumentQuery::new())? else {
        return Ok(Vec::new());
    };
    Ok(documents
        .into_iter()
        .filter_map(|document| match document {
            Value::String(code) => Some(code),
            Value::Object(mut fields) => match fields.remove(field) {
                Some(Value::String(code)) => Some(code),
                _ => None,
            },
            _ => None,
        })
        .collect())
}
