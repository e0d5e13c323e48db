use chrono::{DateTime, Months, TimeZone, Utc};
use dentra_domain::{serde_json::json, CodeConfig, DecodeError, MonthRollover};

use crate::{
    code_service::CodeService, dashboard_service::DashboardService, period::MonthWindow,
    revenue_service::RevenueService, time::FixedClock, CoreError,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 20, 15, 30, 0).unwrap()
}

fn last_month() -> DateTime<Utc> {
    now() - Months::new(1)
}

#[test]
fn end_to_end_revenue_matches_dashboard_example() {
    let clock = FixedClock(now());
    let window = MonthWindow::from_clock(&clock, MonthRollover::Calendar);
    let treatments = json!([
        {"status": "completed", "payment": {"paid": [
            json!({"paid_amount": 100, "date": now().to_rfc3339()}).to_string()
        ]}},
        {"status": "completed", "payment": {"paid": [
            json!({"paid_amount": 50, "date": last_month().to_rfc3339()}).to_string()
        ]}}
    ]);

    let summary = RevenueService::summarize_documents(treatments, &window).expect("summarize");

    assert_eq!(summary.current_month, 100.0);
    assert_eq!(summary.previous_month, 50.0);
    assert_eq!(summary.total_revenue, 50.0);
    assert_eq!(summary.percentage, 100.0);
}

#[test]
fn snapshot_is_idempotent_for_a_frozen_clock() {
    let clock = FixedClock(now());
    let treatments = json!([
        {"status": "completed", "payment": {"paid": [
            "{\"paid_amount\":\"80\",\"date\":\"2024-07-01\"}",
            "garbage"
        ]}},
        {"status": "pending", "payment": {"paid": ["{\"paid_amount\":5,\"date\":\"2024-07-02\"}"]}}
    ]);
    let patients = json!([
        {"createdDate": "2024-07-03T00:00:00.000Z"},
        {"createdDate": "2024-06-03T00:00:00.000Z"},
        {"createdDate": "2024-06-09T00:00:00.000Z"}
    ]);

    let first = DashboardService::snapshot_documents(
        treatments.clone(),
        patients.clone(),
        MonthWindow::from_clock(&clock, MonthRollover::Calendar),
    )
    .expect("first snapshot");
    let second = DashboardService::snapshot_documents(
        treatments,
        patients,
        MonthWindow::from_clock(&clock, MonthRollover::Calendar),
    )
    .expect("second snapshot");

    assert_eq!(first, second);
    assert_eq!(first.revenue.current_month, 80.0);
    assert_eq!(first.patient_growth.current_month, 1);
    assert_eq!(first.patient_growth.previous_month, 2);
    assert_eq!(first.patient_growth.percentage, -50.0);
}

#[test]
fn snapshot_rejects_non_collection_input() {
    let window = MonthWindow::around(now(), MonthRollover::Calendar);
    let err = DashboardService::snapshot_documents(json!([]), json!("patients"), window)
        .expect_err("string is not a collection");
    assert!(matches!(
        err,
        CoreError::Decode(DecodeError::NotACollection("a string"))
    ));
}

#[test]
fn january_revenue_depends_on_rollover_policy() {
    let january = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
    let treatments = json!([
        {"status": "completed", "payment": {"paid": [
            "{\"paid_amount\":200,\"date\":\"2024-12-20T10:00:00Z\"}",
            "{\"paid_amount\":300,\"date\":\"2025-01-02T10:00:00Z\"}"
        ]}}
    ]);

    let calendar = RevenueService::summarize_documents(
        treatments.clone(),
        &MonthWindow::around(january, MonthRollover::Calendar),
    )
    .expect("calendar");
    assert_eq!(calendar.previous_month, 200.0);
    assert_eq!(calendar.percentage, 50.0);

    let same_year = RevenueService::summarize_documents(
        treatments,
        &MonthWindow::around(january, MonthRollover::SameYear),
    )
    .expect("same year");
    assert_eq!(same_year.previous_month, 0.0);
    assert_eq!(same_year.percentage, 100.0);
}

#[test]
fn staff_codes_continue_sequence() {
    let config = CodeConfig::new("NV", 3).with_existing(["NV001", "NV005", "NV003", "XYZ"]);
    assert_eq!(CodeService::next_code(&config), "NV006");
}
