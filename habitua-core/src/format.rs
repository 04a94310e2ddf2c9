//! Formatting helpers shared by the CLI views.

use chrono::NaiveDate;

/// Format a date relative to a reference day (e.g., "Today", "3 days ago").
pub fn format_days_ago(date: NaiveDate, reference: NaiveDate) -> String {
    let days = (reference - date).num_days();

    if days < 0 {
        date.format("%Y-%m-%d").to_string()
    } else if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Format an optional date relative to a reference day, or "Never" if missing.
pub fn format_optional_date(date: Option<NaiveDate>, reference: NaiveDate) -> String {
    match date {
        Some(date) => format_days_ago(date, reference),
        None => "Never".to_string(),
    }
}
