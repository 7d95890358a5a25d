use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone used to derive "today" as an evaluation date.
pub const DEFAULT_EVALUATION_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to an evaluation date in the given timezone.
pub fn evaluation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the default evaluation timezone.
pub fn evaluation_date_today() -> NaiveDate {
    evaluation_date_from_utc(Utc::now(), DEFAULT_EVALUATION_TZ)
}

/// Whole calendar days from `start` to `end`; negative spans become 0.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0)
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Parses a calendar date from the formats upload and manual entry produce.
///
/// Accepts ISO dates, RFC 3339 timestamps (time of day dropped), US slash
/// dates with two or four digit years, and month-name dates such as
/// `Aug. 2nd, 2025`. Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.date_naive());
    }

    let cleaned = normalize_month_name_date(trimmed);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
        .and_then(expand_two_digit_year)
}

/// Drops the period after abbreviated months, commas and ordinal suffixes so
/// `Aug. 2nd, 2025` reads as `Aug 2 2025`.
fn normalize_month_name_date(input: &str) -> String {
    input
        .replace(',', " ")
        .split_whitespace()
        .map(|token| {
            let token = token.trim_end_matches('.');
            let lower = token.to_ascii_lowercase();
            let digits = lower.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            if !digits.is_empty()
                && digits.chars().all(|c| c.is_ascii_digit())
                && ["st", "nd", "rd", "th"].contains(&&lower[digits.len()..])
            {
                digits.to_string()
            } else if lower == "sept" {
                "Sep".to_string()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two digit years (`08/02/25`) are read as 2000 + YY.
fn expand_two_digit_year(date: NaiveDate) -> Option<NaiveDate> {
    if (0..100).contains(&date.year()) {
        date.with_year(2000 + date.year())
    } else {
        Some(date)
    }
}
