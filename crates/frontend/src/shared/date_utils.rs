//! Utilities for date formatting
//!
//! Provides consistent date formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp as "Nov 1, 2025"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// "Nov 1, 2025 - Nov 4, 2025", or a placeholder when a bound is missing
pub fn format_date_range(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} - {}", format_date(s), format_date(e)),
        (Some(s), None) => format!("From {}", format_date(s)),
        _ => "Dates to be announced".to_string(),
    }
}

/// Value for an `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Parse the value of an `<input type="date">`; empty means unset
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Today's date in the browser's time zone
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "Nov 1, 2025");
    }

    #[test]
    fn test_format_date_range() {
        let s = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        let e = Utc.with_ymd_and_hms(2025, 11, 4, 0, 0, 0).unwrap();
        assert_eq!(format_date_range(Some(&s), Some(&e)), "Nov 1, 2025 - Nov 4, 2025");
        assert_eq!(format_date_range(None, Some(&e)), "Dates to be announced");
    }

    #[test]
    fn test_input_value_round_trip() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 19);
        assert_eq!(to_input_value(d), "2025-10-19");
        assert_eq!(from_input_value("2025-10-19"), d);
        assert_eq!(from_input_value(""), None);
        assert_eq!(to_input_value(None), "");
    }
}
