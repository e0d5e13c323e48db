//! Record counts per creation month and their percentage change.

use dentra_domain::{decode_collection, serde_json::Value, CountableRecord, Timestamped};
use serde::{Deserialize, Serialize};

use crate::{
    percent::percentage_change,
    period::{MonthBucket, MonthWindow},
    CoreError,
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    pub current_month: u64,
    pub previous_month: u64,
    pub percentage: f64,
}

pub struct GrowthService;

impl GrowthService {
    pub fn summarize<T: Timestamped>(records: &[T], window: &MonthWindow) -> GrowthSummary {
        let (current_month, previous_month) = records
            .iter()
            .filter_map(Timestamped::created_at)
            .fold((0u64, 0u64), |(current, previous), created| {
                match window.bucket(created) {
                    Some(MonthBucket::Current) => (current + 1, previous),
                    Some(MonthBucket::Previous) => (current, previous + 1),
                    None => (current, previous),
                }
            });
        tracing::debug!(current_month, previous_month, "growth aggregated");
        GrowthSummary {
            current_month,
            previous_month,
            percentage: percentage_change(current_month as f64, previous_month as f64),
        }
    }

    pub fn summarize_documents(
        documents: Value,
        window: &MonthWindow,
    ) -> Result<GrowthSummary, CoreError> {
        let records: Vec<CountableRecord> = decode_collection(documents)?;
        Ok(Self::summarize(&records, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dentra_domain::MonthRollover;

    fn created(year: i32, month: u32) -> CountableRecord {
        CountableRecord::created(Utc.with_ymd_and_hms(year, month, 10, 8, 0, 0).unwrap())
    }

    fn window() -> MonthWindow {
        MonthWindow::around(
            Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap(),
            MonthRollover::Calendar,
        )
    }

    #[test]
    fn counts_each_month_and_rounds_change() {
        let records = vec![
            created(2024, 9),
            created(2024, 9),
            created(2024, 9),
            created(2024, 9),
            created(2024, 8),
            created(2024, 8),
            created(2024, 8),
            created(2023, 9),
            CountableRecord::default(),
        ];
        let summary = GrowthService::summarize(&records, &window());
        assert_eq!(summary.current_month, 4);
        assert_eq!(summary.previous_month, 3);
        assert_eq!(summary.percentage, 33.33);
    }

    #[test]
    fn only_current_month_data_is_one_hundred_percent() {
        let summary = GrowthService::summarize(&[created(2024, 9)], &window());
        assert_eq!(summary.percentage, 100.0);
        let summary = GrowthService::summarize::<CountableRecord>(&[], &window());
        assert_eq!(summary, GrowthSummary::default());
    }

    #[test]
    fn decline_is_negative() {
        let summary = GrowthService::summarize(&[created(2024, 8), created(2024, 8)], &window());
        assert_eq!(summary.current_month, 0);
        assert_eq!(summary.percentage, -100.0);
    }
}
