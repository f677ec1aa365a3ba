//! Display formatting for quote dates

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Format a quote date as `2024年3月15日 星期五`
///
/// Accepts plain `YYYY-MM-DD` dates, RFC 3339 timestamps (shown in local
/// time) and naive `YYYY-MM-DDTHH:MM:SS` timestamps. Anything else is returned
/// unchanged.
pub fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => format_naive_date(parsed),
        None => {
            tracing::debug!("Unrecognised quote date: {:?}", date);
            date.to_string()
        }
    }
}

/// Format an already parsed calendar date
pub fn format_naive_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{}年{}月{}日 星期{}", date.year(), date.month(), date.day(), weekday)
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();

    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|parsed| parsed.date())
}
