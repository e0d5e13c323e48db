//! Paid revenue of completed treatments, current month against previous.

use dentra_domain::{decode_collection, serde_json::Value, TreatmentRecord};
use serde::{Deserialize, Serialize};

use crate::{
    percent::percentage_change,
    period::{MonthBucket, MonthWindow},
    CoreError,
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub current_month: f64,
    pub previous_month: f64,
    /// Difference between the two months; equals `current_month` when the
    /// previous month has no revenue.
    pub total_revenue: f64,
    pub percentage: f64,
}

pub struct RevenueService;

impl RevenueService {
    pub fn summarize(records: &[TreatmentRecord], window: &MonthWindow) -> RevenueSummary {
        let mut current_month = 0.0;
        let mut previous_month = 0.0;
        let payments = records
            .iter()
            .filter(|record| record.is_completed())
            .flat_map(|record| record.payments.iter());
        for entry in payments {
            match window.bucket(entry.date) {
                Some(MonthBucket::Current) => current_month += entry.amount,
                Some(MonthBucket::Previous) => previous_month += entry.amount,
                None => {}
            }
        }
        tracing::debug!(
            current = %window.current,
            previous = %window.previous,
            current_month,
            previous_month,
            "revenue aggregated"
        );
        RevenueSummary {
            current_month,
            previous_month,
            total_revenue: current_month - previous_month,
            percentage: percentage_change(current_month, previous_month),
        }
    }

    /// Decodes a raw treatment collection and summarizes it.
    pub fn summarize_documents(
        documents: Value,
        window: &MonthWindow,
    ) -> Result<RevenueSummary, CoreError> {
        let records: Vec<TreatmentRecord> = decode_collection(documents)?;
        Ok(Self::summarize(&records, window))
    }
}
