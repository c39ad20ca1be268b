//! Leading-timestamp recognition for activity log lines.
//!
//! A line is a new event only if it begins with a parseable timestamp
//! token; anything else is continuation text. The token may be bracketed
//! or bare, ISO or US-slashed, with optional seconds and optional 12-hour
//! AM/PM.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Regex to capture a leading timestamp token and the remainder of the line.
///
/// The time-of-day component is required: a bare date at the start of a
/// line (e.g. "3/4 of users affected") must not start an event.
static LEADING_TS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^\s*
          \[?\s*
          (?P<ts>\d{1,4}[-/]\d{1,2}[-/]\d{1,4}
            [\sT]\d{1,2}:\d{2}(?::\d{2})?
            (?:\s*[AaPp][Mm]\b)?)
          \s*\]?
          \s*(?:[-\u{2013}\u{2014}]\s*)?
          (?P<rest>.*)$",
    )
    .expect("Invalid leading timestamp regex")
});

/// Accepted timestamp formats, most specific first. The first format that
/// parses the whole token wins.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Splits a log line into its leading timestamp and the remaining text.
///
/// Returns `None` when the line does not begin with a parseable timestamp,
/// which marks it as continuation text. A token that looks like a
/// timestamp but does not parse (e.g. month 13) is treated the same way:
/// skipped, never fatal.
pub fn split_leading_timestamp(line: &str) -> Option<(NaiveDateTime, &str)> {
    let caps = LEADING_TS_REGEX.captures(line)?;
    let token = caps.name("ts")?.as_str();
    let rest = caps.name("rest").map(|m| m.as_str()).unwrap_or("");

    let timestamp = parse_token(token)?;
    Some((timestamp, rest))
}

fn parse_token(token: &str) -> Option<NaiveDateTime> {
    // Normalize interior whitespace and AM/PM case so one format list
    // covers the common export variants.
    let normalized = token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase();

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, mi, s).unwrap())
    }

    #[test]
    fn test_iso_with_seconds() {
        let (ts, rest) = split_leading_timestamp("2024-03-01 14:05:33 - Jane: done").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 14, 5, 33));
        assert_eq!(rest, "Jane: done");
    }

    #[test]
    fn test_iso_without_seconds() {
        let (ts, rest) = split_leading_timestamp("2024-03-01 14:05 Jane: done").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 14, 5, 0));
        assert_eq!(rest, "Jane: done");
    }

    #[test]
    fn test_iso_t_separator() {
        let (ts, _) = split_leading_timestamp("2024-03-01T09:15 system note").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 9, 15, 0));
    }

    #[test]
    fn test_us_twelve_hour() {
        let (ts, rest) = split_leading_timestamp("03/01/2024 2:05 PM - any updates?").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 14, 5, 0));
        assert_eq!(rest, "any updates?");
    }

    #[test]
    fn test_us_twelve_hour_lowercase() {
        let (ts, _) = split_leading_timestamp("3/1/2024 9:05 am note").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 9, 5, 0));
    }

    #[test]
    fn test_us_twenty_four_hour() {
        let (ts, _) = split_leading_timestamp("03/01/2024 14:05 note").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 14, 5, 0));
    }

    #[test]
    fn test_bracketed_token() {
        let (ts, rest) = split_leading_timestamp("[2024-03-01 08:30] assigned to Jane").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 8, 30, 0));
        assert_eq!(rest, "assigned to Jane");
    }

    #[test]
    fn test_continuation_text_is_none() {
        assert!(split_leading_timestamp("and then the printer caught fire").is_none());
        assert!(split_leading_timestamp("").is_none());
    }

    #[test]
    fn test_bare_date_is_continuation() {
        // "3/4 of users" must not be read as a timestamp.
        assert!(split_leading_timestamp("3/4 of users affected").is_none());
        assert!(split_leading_timestamp("2024-03-01 note without time").is_none());
    }

    #[test]
    fn test_unparseable_date_inside_valid_shape() {
        // Looks like a timestamp, but month 13 does not parse.
        assert!(split_leading_timestamp("2024-13-01 09:00 - impossible").is_none());
        assert!(split_leading_timestamp("13/45/2024 09:00 - impossible").is_none());
    }

    #[test]
    fn test_rest_may_be_empty() {
        let (ts, rest) = split_leading_timestamp("2024-03-01 09:00").unwrap();
        assert_eq!(ts, dt(2024, 3, 1, 9, 0, 0));
        assert_eq!(rest, "");
    }
}
