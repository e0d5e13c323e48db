//! Records counted by creation month (patients, appointments, ...).

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    common::{Identifiable, Timestamped},
    error::{json_kind, DecodeError},
    lenient::deserialize_string,
    timestamp::deserialize_lenient,
};

/// Any document that only matters for when it was created.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CountableRecord {
    #[serde(rename = "$id", default, deserialize_with = "deserialize_string")]
    pub id: Option<String>,
    #[serde(rename = "createdDate", default, deserialize_with = "deserialize_lenient")]
    pub created_date: Option<DateTime<Utc>>,
    /// Creation metadata stamped by the document store; used when `createdDate` is absent.
    #[serde(rename = "$createdAt", default, deserialize_with = "deserialize_lenient")]
    pub store_created_at: Option<DateTime<Utc>>,
}

impl CountableRecord {
    pub fn created(at: DateTime<Utc>) -> Self {
        Self {
            created_date: Some(at),
            ..Self::default()
        }
    }
}

impl Timestamped for CountableRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_date.or(self.store_created_at)
    }
}

impl Identifiable for CountableRecord {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Decodes a document collection, skipping documents that do not fit `T`.
///
/// Only a value that is not an array at all is an error.
pub fn decode_collection<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DecodeError> {
    let Value::Array(documents) = value else {
        return Err(DecodeError::NotACollection(json_kind(&value)));
    };
    let mut decoded = Vec::with_capacity(documents.len());
    for (index, document) in documents.into_iter().enumerate() {
        match serde_json::from_value::<T>(document) {
            Ok(item) => decoded.push(item),
            Err(err) => tracing::warn!(index, error = %err, "skipping undecodable document"),
        }
    }
    Ok(decoded)
}

/// Parses JSON text and decodes it with [`decode_collection`].
pub fn parse_collection<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, DecodeError> {
    decode_collection(serde_json::from_str(json)?)
}
