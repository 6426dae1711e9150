//! Timestamp utilities
//!
//! Show start times are naive local timestamps. The boundary between past
//! and upcoming is always `start_time > now`.

use chrono::{Local, NaiveDateTime};

use crate::{Error, Result};

/// Format used when show start times are handed to views and the JSON API
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats accepted from the show submission form
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Current local wall-clock instant
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a start time as ISO-8601 without timezone
pub fn format_start_time(start_time: &NaiveDateTime) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Parse a submitted start time
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            Error::Validation(format!(
                "start_time '{}' is not a valid date and time",
                value
            ))
        })
}

/// Display styles for dates on HTML pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Sunday April, 1, 2035 at 8:00PM`
    Full,
    /// `Sun 04, 01, 2035 8:00PM`
    Medium,
}

/// Human-readable date for templates
pub fn format_datetime(value: &NaiveDateTime, style: DateStyle) -> String {
    match style {
        DateStyle::Full => value.format("%A %B, %-d, %Y at %-I:%M%p").to_string(),
        DateStyle::Medium => value.format("%a %m, %d, %Y %-I:%M%p").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2035, 4, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_start_time_is_iso_without_timezone() {
        assert_eq!(format_start_time(&sample()), "2035-04-01T20:00:00");
    }

    #[test]
    fn test_parse_accepts_form_variants() {
        for input in [
            "2035-04-01 20:00:00",
            "2035-04-01 20:00",
            "2035-04-01T20:00:00",
            " 2035-04-01T20:00 ",
        ] {
            assert_eq!(parse_start_time(input).unwrap(), sample(), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_start_time("next tuesday").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_format_datetime_styles() {
        assert_eq!(format_datetime(&sample(), DateStyle::Full), "Sunday April, 1, 2035 at 8:00PM");
        assert_eq!(format_datetime(&sample(), DateStyle::Medium), "Sun 04, 01, 2035 8:00PM");
    }
}
