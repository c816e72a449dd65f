//! Calendar-day normalization and whole-day arithmetic.
//!
//! Everything the engine reasons about is a plain calendar day; time
//! components are truncated on the way in. Day differences are computed as
//! whole-day integers on `NaiveDate`, never by subtracting timestamps, so
//! daylight-saving artifacts cannot leak into the counts.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parse a calendar day from the formats the document store emits.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 datetimes, and bare
/// `YYYY-MM-DDTHH:MM:SS[.fff]` strings. Returns `None` for anything else:
/// an unreadable date means "no date", not a failure.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(day) = trimmed.parse::<NaiveDate>() {
        return Some(day);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }
    None
}

/// Day-of-week index with Sunday = 0, matching the stored weekday sets.
pub fn weekday_index(day: NaiveDate) -> u8 {
    day.weekday().num_days_from_sunday() as u8
}

/// Signed whole-day count `b - a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Step a day forward, or backward for negative `n`.
pub fn add_days(day: NaiveDate, n: i64) -> NaiveDate {
    day + Duration::days(n)
}

/// Fold a raw stored weekday value into the canonical `0..=6` range.
///
/// Older records use `1..=7` with `7` meaning Sunday, so `7` folds to `0`.
/// Anything still out of range after folding is discarded.
pub fn fold_weekday(value: u8) -> Option<u8> {
    let folded = if value == 7 { 0 } else { value };
    (folded <= 6).then_some(folded)
}

/// Serde helper for optional date fields in the snapshot shape.
///
/// Absent, null, and unparseable values all deserialize to `None`.
pub fn deserialize_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_day))
}
