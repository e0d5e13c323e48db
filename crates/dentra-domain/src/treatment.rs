//! Treatments and the paid entries recorded against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    common::Identifiable,
    error::{json_kind, DecodeError},
    lenient::deserialize_string,
    timestamp::timestamp_from_value,
};

/// Lifecycle state of a treatment. Only `completed` treatments earn revenue.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TreatmentStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One recorded payment against a treatment, decoded from its wire form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaidEntry {
    #[serde(rename = "paid_amount")]
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PaidEntry {
    pub fn new(amount: f64, date: DateTime<Utc>) -> Self {
        Self {
            amount,
            date,
            notes: None,
        }
    }

    /// Decodes a paid entry given either as a JSON-encoded string or as an object.
    pub fn decode(raw: &Value) -> Result<Self, DecodeError> {
        let parsed;
        let value = match raw {
            Value::String(text) => {
                parsed = serde_json::from_str::<Value>(text)?;
                &parsed
            }
            other => other,
        };
        let Value::Object(fields) = value else {
            return Err(DecodeError::PaidEntry(format!(
                "expected an object, found {}",
                json_kind(value)
            )));
        };
        let date = fields
            .get("date")
            .and_then(timestamp_from_value)
            .ok_or_else(|| DecodeError::PaidEntry("missing or unparsable `date`".into()))?;
        Ok(Self {
            amount: coerce_amount(fields.get("paid_amount")),
            date,
            notes: fields
                .get("notes")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}

/// Numbers pass through, numeric strings are parsed, everything else is zero.
fn coerce_amount(raw: Option<&Value>) -> f64 {
    match raw {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Raw `payment.paid` entries; a missing or non-array `paid` is empty.
fn deserialize_paid_entries<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(mut payment)) => match payment.remove("paid") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    })
}

/// Status strings decode exactly; any other shape is `Unknown`.
fn deserialize_status<'de, D>(deserializer: D) -> Result<TreatmentStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|raw| serde_json::from_value(raw).ok())
        .unwrap_or_default())
}

/// Wire shape of a treatment document as the document store returns it.
#[derive(Debug, Deserialize)]
struct TreatmentDocument {
    #[serde(rename = "$id", default, deserialize_with = "deserialize_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string")]
    code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_status")]
    status: TreatmentStatus,
    #[serde(rename = "payment", default, deserialize_with = "deserialize_paid_entries")]
    paid: Vec<Value>,
}

/// A treatment with its paid entries decoded once at the boundary.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(from = "TreatmentDocument")]
pub struct TreatmentRecord {
    pub id: Option<String>,
    pub code: Option<String>,
    pub status: TreatmentStatus,
    pub payments: Vec<PaidEntry>,
}

impl TreatmentRecord {
    pub fn new(status: TreatmentStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_payment(mut self, entry: PaidEntry) -> Self {
        self.payments.push(entry);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TreatmentStatus::Completed
    }

    /// Sum of every decoded paid entry, regardless of date.
    pub fn paid_total(&self) -> f64 {
        self.payments.iter().map(|entry| entry.amount).sum()
    }
}

impl From<TreatmentDocument> for TreatmentRecord {
    fn from(document: TreatmentDocument) -> Self {
        let mut payments = Vec::with_capacity(document.paid.len());
        for (index, raw) in document.paid.iter().enumerate() {
            match PaidEntry::decode(raw) {
                Ok(entry) => payments.push(entry),
                Err(err) => tracing::warn!(
                    treatment = document.id.as_deref().unwrap_or("<unknown>"),
                    index,
                    error = %err,
                    "skipping malformed paid entry"
                ),
            }
        }
        Self {
            id: document.id,
            code: document.code,
            status: document.status,
            payments,
        }
    }
}

impl Identifiable for TreatmentRecord {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_string_encoded_entries() {
        let record: TreatmentRecord = serde_json::from_value(json!({
            "$id": "t1",
            "status": "completed",
            "payment": {
                "paid": [
                    "{\"paid_amount\":100,\"date\":\"2024-05-02T09:00:00.000Z\",\"notes\":\"cash\"}",
                    {"paid_amount": "25.5", "date": "2024-05-03"}
                ]
            }
        }))
        .unwrap();
        assert!(record.is_completed());
        assert_eq!(record.id(), Some("t1"));
        assert_eq!(record.payments.len(), 2);
        assert_eq!(record.payments[0].notes.as_deref(), Some("cash"));
        assert_eq!(record.paid_total(), 125.5);
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let record: TreatmentRecord = serde_json::from_value(json!({
            "status": "completed",
            "payment": {
                "paid": [
                    "not json",
                    "[1, 2]",
                    "{\"paid_amount\":10}",
                    "{\"paid_amount\":40,\"date\":\"2024-05-02\"}"
                ]
            }
        }))
        .unwrap();
        assert_eq!(record.payments.len(), 1);
        assert_eq!(record.paid_total(), 40.0);
    }

    #[test]
    fn amount_coercion_defaults_to_zero() {
        let entry = PaidEntry::decode(&json!({"date": "2024-05-02", "paid_amount": "abc"})).unwrap();
        assert_eq!(entry.amount, 0.0);
        let entry = PaidEntry::decode(&json!({"date": "2024-05-02"})).unwrap();
        assert_eq!(entry.amount, 0.0);
    }

    #[test]
    fn informational_fields_of_any_type_keep_the_payments() {
        let record: TreatmentRecord = serde_json::from_value(json!({
            "$id": 31,
            "code": 12,
            "status": "completed",
            "payment": {"paid": [
                "{\"paid_amount\":100,\"date\":\"2024-07-02T09:00:00Z\"}",
                {"paid_amount": 5, "date": 1_719_792_000_000i64}
            ]}
        }))
        .unwrap();
        assert_eq!(record.id(), Some("31"));
        assert_eq!(record.code.as_deref(), Some("12"));
        assert_eq!(record.payments.len(), 2);
        assert_eq!(record.paid_total(), 105.0);
    }

    #[test]
    fn odd_payment_shapes_mean_no_payments() {
        for payment in [json!(null), json!({"paid": null}), json!({"paid": "x"}), json!("cash")] {
            let record: TreatmentRecord =
                serde_json::from_value(json!({"status": "completed", "payment": payment})).unwrap();
            assert!(record.is_completed());
            assert!(record.payments.is_empty());
        }
        let record: TreatmentRecord = serde_json::from_value(json!({"status": 3})).unwrap();
        assert_eq!(record.status, TreatmentStatus::Unknown);
    }

    #[test]
    fn status_matching_is_exact() {
        let record: TreatmentRecord =
            serde_json::from_value(json!({"status": "Completed"})).unwrap();
        assert_eq!(record.status, TreatmentStatus::Unknown);
        let record: TreatmentRecord =
            serde_json::from_value(json!({"status": "in-progress", "payment": null})).unwrap();
        assert_eq!(record.status, TreatmentStatus::InProgress);
        assert!(record.payments.is_empty());
    }
}
