//! Local-time helpers
//!
//! History filtering and analytics work on local calendar dates; bills
//! store UTC millisecond timestamps.

use chrono::{Local, LocalResult, NaiveDate, TimeZone};

/// Local calendar date of a UTC millisecond timestamp
pub fn local_date(ts_millis: i64) -> NaiveDate {
    match Local.timestamp_millis_opt(ts_millis) {
        LocalResult::Single(dt) => dt.date_naive(),
        LocalResult::Ambiguous(dt, _) => dt.date_naive(),
        // Out-of-range timestamp; treat as today rather than panic
        LocalResult::None => Local::now().date_naive(),
    }
}

/// Today's local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` query parameter
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Local wall-clock rendering for receipts
pub fn format_local(ts_millis: i64) -> String {
    match Local.timestamp_millis_opt(ts_millis) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y-%m-%d %H:%M").to_string()
        }
        LocalResult::None => String::from("-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_iso_dates_only() {
        assert_eq!(
            parse_date("2026-08-28"),
            NaiveDate::from_ymd_opt(2026, 8, 28)
        );
        assert!(parse_date("28/08/2026").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn timestamp_maps_to_its_local_day() {
        let ts = shared::util::now_millis();
        assert_eq!(local_date(ts), today());
    }
}
