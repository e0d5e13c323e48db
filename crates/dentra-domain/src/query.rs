//! Tagged document filters with optional pagination.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single predicate over a document field. Fields may be dotted paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Filter {
    #[default]
    None,
    Equal {
        field: String,
        value: Value,
    },
    Contains {
        field: String,
        substr: String,
    },
}

impl Filter {
    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Equal {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, substr: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            substr: substr.into(),
        }
    }

    pub fn matches(&self, document: &Value) -> bool {
        match self {
            Filter::None => true,
            Filter::Equal { field, value } => {
                lookup(document, field).is_some_and(|found| values_equal(found, value))
            }
            Filter::Contains { field, substr } => lookup(document, field)
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_lowercase().contains(&substr.to_lowercase())),
        }
    }
}

/// Resolves a dotted path such as `payment.method`.
fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| current.get(segment))
}

/// Strings given on a command line compare equal to scalars rendered the same way.
fn values_equal(found: &Value, expected: &Value) -> bool {
    if found == expected {
        return true;
    }
    match (found, expected) {
        (Value::Number(_) | Value::Bool(_), Value::String(text)) => found.to_string() == *text,
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

/// Conjunction of filters followed by an optional page window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentQuery {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub page: Option<Page>,
}

impl DocumentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn paginate(mut self, offset: usize, limit: usize) -> Self {
        self.page = Some(Page { offset, limit });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.filters.iter().all(|filter| *filter == Filter::None)
    }

    pub fn matches(&self, document: &Value) -> bool {
        self.filters.iter().all(|filter| filter.matches(document))
    }

    /// Returns matching documents, paginated after filtering.
    pub fn apply(&self, documents: Vec<Value>) -> Vec<Value> {
        let matching = documents.into_iter().filter(|doc| self.matches(doc));
        match self.page {
            Some(Page { offset, limit }) => matching.skip(offset).take(limit).collect(),
            None => matching.collect(),
        }
    }
}
