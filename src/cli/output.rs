use colored::Colorize;
use dentra_core::{DashboardSummary, GrowthSummary, MonthWindow, RevenueSummary};

fn heading(title: &str, window: &MonthWindow) -> String {
    format!(
        "{} ({} vs {})",
        title.bold(),
        window.current,
        window.previous
    )
}

fn signed_percentage(percentage: f64) -> String {
    let text = format!("{percentage:+.2}%");
    if percentage > 0.0 {
        text.green().to_string()
    } else if percentage < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}

pub fn render_revenue(summary: &RevenueSummary, window: &MonthWindow, currency: &str) -> String {
    [
        heading("Revenue", window),
        format!("  Current month:  {:.2} {currency}", summary.current_month),
        format!("  Previous month: {:.2} {currency}", summary.previous_month),
        format!("  Total revenue:  {:.2} {currency}", summary.total_revenue),
        format!("  Change:         {}", signed_percentage(summary.percentage)),
    ]
    .join("\n")
}

pub fn render_growth(summary: &GrowthSummary, window: &MonthWindow, label: &str) -> String {
    [
        heading(label, window),
        format!("  Current month:  {}", summary.current_month),
        format!("  Previous month: {}", summary.previous_month),
        format!("  Change:         {}", signed_percentage(summary.percentage)),
    ]
    .join("\n")
}

pub fn render_dashboard(summary: &DashboardSummary, currency: &str) -> String {
    format!(
        "{}\n\n{}",
        render_revenue(&summary.revenue, &summary.window, currency),
        render_growth(&summary.patient_growth, &summary.window, "Patients")
    )
}
