use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d %b %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y", "%d %B %Y"];

/// Parses a date-time, accepting the `TODAY` (midnight of `now`) and `NOW`
/// sentinels in any case.
pub fn parse_date_time(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("today") {
        return now.date().and_hms_opt(0, 0, 0);
    }

    if input.eq_ignore_ascii_case("now") {
        return Some(now);
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(input) {
        return Some(value.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| parse_plain_date(input)?.and_hms_opt(0, 0, 0))
}

/// Parses a date with the same sentinels as [`parse_date_time`].
pub fn parse_date(input: &str, now: NaiveDateTime) -> Option<NaiveDate> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("today") || trimmed.eq_ignore_ascii_case("now") {
        return Some(now.date());
    }

    parse_plain_date(trimmed).or_else(|| Some(parse_date_time(trimmed, now)?.date()))
}

fn parse_plain_date(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}
