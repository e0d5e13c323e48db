//! Combines every dashboard figure into one report.

use dentra_domain::{decode_collection, serde_json::Value, CountableRecord, TreatmentRecord};
use serde::Serialize;

use crate::{
    growth_service::{GrowthService, GrowthSummary},
    period::MonthWindow,
    revenue_service::{RevenueService, RevenueSummary},
    CoreError,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub window: MonthWindow,
    pub revenue: RevenueSummary,
    pub patient_growth: GrowthSummary,
}

pub struct DashboardService;

impl DashboardService {
    pub fn snapshot(
        treatments: &[TreatmentRecord],
        patients: &[CountableRecord],
        window: MonthWindow,
    ) -> DashboardSummary {
        DashboardSummary {
            window,
            revenue: RevenueService::summarize(treatments, &window),
            patient_growth: GrowthService::summarize(patients, &window),
        }
    }

    pub fn snapshot_documents(
        treatments: Value,
        patients: Value,
        window: MonthWindow,
    ) -> Result<DashboardSummary, CoreError> {
        let treatments: Vec<TreatmentRecord> = decode_collection(treatments)?;
        let patients: Vec<CountableRecord> = decode_collection(patients)?;
        Ok(Self::snapshot(&treatments, &patients, window))
    }
}
