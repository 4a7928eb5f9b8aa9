//! Parsing of client-supplied due dates.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-time layouts carrying an offset. `%#z` accepts `Z`, `+05`, `+0530`,
/// and `+05:30`.
const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Date-time layouts without an offset; values are read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 due date into a UTC timestamp.
///
/// Accepts date-times with an offset (RFC 3339, minute precision, and
/// `+hh`/`+hhmm` offsets), offset-less date-times (read as UTC), and
/// calendar dates in extended (`YYYY-MM-DD`) or basic (`YYYYMMDD`) form
/// (read as midnight UTC).
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when no accepted layout
/// matches.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    let trimmed = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let offset = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok());
    if let Some(date_time) = offset {
        return Ok(date_time.with_timezone(&Utc));
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok());
    if let Some(date_time) = naive {
        return Ok(date_time.and_utc());
    }

    let extended = basic_to_extended_date(trimmed);
    NaiveDate::parse_from_str(extended.as_deref().unwrap_or(trimmed), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TaskDomainError::InvalidDueDate(value.to_owned()))
}

/// Rewrites an eight-digit `YYYYMMDD` date as `YYYY-MM-DD`.
fn basic_to_extended_date(value: &str) -> Option<String> {
    if value.len() != 8 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "{}-{}-{}",
        value.get(..4)?,
        value.get(4..6)?,
        value.get(6..)?
    ))
}
