use crate::domain::error::DomainError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Normalize a submitted date into a UTC timestamp.
///
/// Accepts RFC3339 (offset honoured), a `datetime-local` style value such as
/// `2024-03-01T09:30` (interpreted in the machine's local zone), or a bare
/// `YYYY-MM-DD` (local midnight).
pub fn parse_trade_date(s: &str) -> Result<DateTime<Utc>, DomainError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DomainError::InvalidInput("date is required".into()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_to_utc(naive, s);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return local_to_utc(naive, s);
        }
    }

    Err(DomainError::InvalidInput(format!(
        "Invalid date: {s}. Use YYYY-MM-DDTHH:MM or RFC3339"
    )))
}

fn local_to_utc(naive: NaiveDateTime, raw: &str) -> Result<DateTime<Utc>, DomainError> {
    // earliest() picks the first instant for ambiguous (DST fall-back) times
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| DomainError::InvalidInput(format!("Nonexistent local time: {raw}")))
}
