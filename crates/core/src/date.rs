//! Date parsing for service payloads.
//!
//! The service emits dates in a handful of ISO-like shapes depending on where
//! the value came from (CSV columns, `strftime('%Y-%m-%d')`, `isoformat()`).
//! All of them are normalized to `DateTime<Utc>`; values without an offset are
//! taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{DomainError, DomainResult};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-like date string returned by the service.
///
/// Accepted shapes: RFC 3339 (`2025-10-05T08:00:00Z`, `…+02:00`), naive
/// date-times (`2025-10-05T08:00:00`, `2025-10-05 08:00:00.123`) and plain
/// calendar dates (`2025-10-05`, midnight UTC).
pub fn parse_service_date(raw: &str) -> DomainResult<DateTime<Utc>> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::invalid_date(raw))
}

/// Midnight UTC on the given calendar day.
///
/// Out-of-range components collapse to the Unix epoch; callers pass literals.
pub fn utc_ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    utc_ymd_hm(year, month, day, 0, 0)
}

/// The given calendar day and wall-clock time, in UTC.
pub fn utc_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_calendar_date_is_midnight_utc() {
        let parsed = parse_service_date("2025-10-05").unwrap();
        assert_eq!(parsed, utc_ymd(2025, 10, 5));
    }

    #[test]
    fn rfc3339_offsets_are_normalized() {
        let parsed = parse_service_date("2025-10-05T10:30:00+02:00").unwrap();
        assert_eq!(parsed, utc_ymd_hm(2025, 10, 5, 8, 30));
    }

    #[test]
    fn naive_datetime_shapes_are_accepted() {
        let expected = utc_ymd_hm(2025, 10, 9, 14, 15);
        assert_eq!(parse_service_date("2025-10-09T14:15:00").unwrap(), expected);
        assert_eq!(parse_service_date("2025-10-09 14:15:00").unwrap(), expected);
        assert_eq!(parse_service_date("2025-10-09T14:15").unwrap(), expected);
        assert_eq!(
            parse_service_date("2025-10-09T14:15:00.000").unwrap(),
            expected
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_service_date(" 2025-10-05\n").unwrap(),
            utc_ymd(2025, 10, 5)
        );
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["", "yesterday", "2025-13-01", "2025-02-30", "05/10/2025"] {
            let err = parse_service_date(raw).unwrap_err();
            assert_eq!(err, DomainError::InvalidDate(raw.to_string()));
        }
    }

    proptest! {
        #[test]
        fn any_valid_calendar_date_parses_to_itself(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02}");
            prop_assert_eq!(parse_service_date(&raw).unwrap(), utc_ymd(year, month, day));
        }
    }
}
