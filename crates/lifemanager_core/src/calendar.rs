//! Calendar parsing and display helpers.
//!
//! # Responsibility
//! - Parse the persisted ISO date (`YYYY-MM-DD`) and `HH:MM` time shapes.
//! - Format day headers and 12-hour time labels for presentation callers.
//!
//! # Invariants
//! - Parsing never panics; malformed input yields `None` and callers pick
//!   their own substitution default.
//! - Formatting output is locale-independent (English names).

use chrono::{Duration, Local, NaiveDate, NaiveTime};

/// Persisted calendar date shape.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Persisted time-of-day shape.
pub const TIME_FORMAT: &str = "%H:%M";

const DAY_HEADER_FORMAT: &str = "%A, %B %d, %Y";
const TWELVE_HOUR_FORMAT: &str = "%I:%M %p";
const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns the current local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a persisted `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Parses a persisted `HH:MM` time-of-day.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if !trimmed.contains(':') {
        return None;
    }
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT).ok()
}

/// Formats a date in the persisted `YYYY-MM-DD` shape.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a time in the persisted zero-padded `HH:MM` shape.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Builds the human header for one day group.
///
/// `Wednesday, January 10, 2024`, suffixed with ` (Today)` or
/// ` (Tomorrow)` relative to `today`.
pub fn day_header(date: NaiveDate, today: NaiveDate) -> String {
    let mut header = date.format(DAY_HEADER_FORMAT).to_string();
    if date == today {
        header.push_str(" (Today)");
    } else if Some(date) == today.checked_add_signed(Duration::days(1)) {
        header.push_str(" (Tomorrow)");
    }
    header
}

/// Renders a persisted `HH:MM` value as `hh:mm AM/PM`.
///
/// Malformed values are returned verbatim.
pub fn display_time_12h(raw: &str) -> String {
    match parse_time(raw) {
        Some(time) => time.format(TWELVE_HOUR_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Short English weekday name (`Mon`..`Sun`).
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

pub(crate) fn backup_stamp(now: chrono::NaiveDateTime) -> String {
    now.format(BACKUP_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{day_header, display_time_12h, parse_date, parse_time, weekday_short};
    use chrono::NaiveDate;

    fn date(raw: &str) -> NaiveDate {
        parse_date(raw).expect("fixture date should parse")
    }

    #[test]
    fn parse_date_rejects_non_iso_values() {
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("10/01/2024").is_none());
        assert!(parse_date("").is_none());
        assert_eq!(
            parse_date(" 2024-01-10 "),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
    }

    #[test]
    fn parse_time_requires_colon_and_valid_range() {
        assert!(parse_time("0900").is_none());
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("09:61").is_none());
        assert!(parse_time("08:30").is_some());
    }

    #[test]
    fn day_header_marks_today_and_tomorrow() {
        let today = date("2024-01-10");
        assert_eq!(
            day_header(today, today),
            "Wednesday, January 10, 2024 (Today)"
        );
        assert_eq!(
            day_header(date("2024-01-11"), today),
            "Thursday, January 11, 2024 (Tomorrow)"
        );
        assert_eq!(day_header(date("2024-01-12"), today), "Friday, January 12, 2024");
    }

    #[test]
    fn twelve_hour_display_keeps_malformed_values() {
        assert_eq!(display_time_12h("13:05"), "01:05 PM");
        assert_eq!(display_time_12h("noon"), "noon");
    }

    #[test]
    fn weekday_short_uses_english_abbreviation() {
        assert_eq!(weekday_short(date("2024-01-08")), "Mon");
    }
}
