//! Time-window handling for chart queries.
//!
//! The API accepts a window as two absolute timestamps, or as a relative
//! "N minutes before now" start paired with the literal end `"now"`. This
//! module models those inputs as [`TimeSpec`] and resolves them into the
//! wire format at call time.

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Absolute timestamp format the API expects.
pub const TIME_FORMAT: &str = "%m-%d-%Y %H:%M";

/// Timezone used when a call does not name one.
const DEFAULT_TZ: &str = "UTC";

/// One side of a chart time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSpec {
    /// The literal `"now"`; only valid as the end of a relative window.
    Now,
    /// Minutes relative to the current instant; must be negative.
    Relative(i64),
    /// A preformatted [`TIME_FORMAT`] timestamp, passed through unchanged.
    Absolute(String),
}

impl FromStr for TimeSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "now" {
            return Ok(TimeSpec::Now);
        }
        if let Ok(minutes) = trimmed.parse::<i64>() {
            return Ok(TimeSpec::Relative(minutes));
        }
        Ok(TimeSpec::Absolute(trimmed.to_string()))
    }
}

/// Resolve a window into the two absolute timestamps the API expects.
///
/// Absolute pairs pass through unchanged after a format check. A negative
/// relative start paired with [`TimeSpec::Now`] resolves against the current
/// instant in `tz` (default UTC). Every other combination is rejected.
pub(crate) fn resolve_window(
    start: &TimeSpec,
    end: &TimeSpec,
    tz: Option<&str>,
) -> Result<(String, String)> {
    resolve_window_at(start, end, tz, Utc::now())
}

fn resolve_window_at(
    start: &TimeSpec,
    end: &TimeSpec,
    tz: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(String, String)> {
    match (start, end) {
        (TimeSpec::Absolute(start), TimeSpec::Absolute(end)) => {
            check_absolute(start)?;
            check_absolute(end)?;
            Ok((start.clone(), end.clone()))
        }
        (TimeSpec::Relative(minutes), TimeSpec::Now) => {
            if *minutes >= 0 {
                return Err(Error::InvalidArgument(
                    "startTime must be a negative number of minutes when endTime is \"now\""
                        .into(),
                ));
            }
            let zone = parse_tz(tz.unwrap_or(DEFAULT_TZ))?;
            let end_at = now.with_timezone(&zone);
            let start_at = TimeDelta::try_minutes(*minutes)
                .and_then(|delta| end_at.checked_add_signed(delta))
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "startTime of {minutes} minutes is out of range"
                    ))
                })?;
            Ok((
                start_at.format(TIME_FORMAT).to_string(),
                end_at.format(TIME_FORMAT).to_string(),
            ))
        }
        (TimeSpec::Relative(_), _) => Err(Error::InvalidArgument(
            "endTime must be the literal \"now\" when startTime is relative".into(),
        )),
        (_, TimeSpec::Now) => Err(Error::InvalidArgument(
            "startTime must be a negative number of minutes when endTime is \"now\"".into(),
        )),
        _ => Err(Error::InvalidArgument(
            "time window must be two absolute timestamps or a negative startTime with endTime \"now\""
                .into(),
        )),
    }
}

fn parse_tz(name: &str) -> Result<Tz> {
    name.parse().map_err(|_| {
        Error::InvalidArgument(format!(
            "unknown timezone {name:?}; use a tz database name such as \"America/New_York\""
        ))
    })
}

fn check_absolute(value: &str) -> Result<()> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            Error::InvalidArgument(format!(
                "timestamp {value:?} does not match the {TIME_FORMAT:?} format"
            ))
        })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_parses_now() {
        assert_eq!("now".parse::<TimeSpec>().unwrap(), TimeSpec::Now);
        assert_eq!(" now ".parse::<TimeSpec>().unwrap(), TimeSpec::Now);
    }

    #[test]
    fn test_parses_relative_minutes() {
        assert_eq!("-60".parse::<TimeSpec>().unwrap(), TimeSpec::Relative(-60));
        assert_eq!("15".parse::<TimeSpec>().unwrap(), TimeSpec::Relative(15));
    }

    #[test]
    fn test_parses_absolute_timestamp() {
        assert_eq!(
            "06-15-2024 11:00".parse::<TimeSpec>().unwrap(),
            TimeSpec::Absolute("06-15-2024 11:00".to_string())
        );
    }

    #[test]
    fn test_absolute_window_passes_through() {
        let start = TimeSpec::Absolute("06-15-2024 10:00".to_string());
        let end = TimeSpec::Absolute("06-15-2024 12:00".to_string());
        let (s, e) = resolve_window_at(&start, &end, None, utc(2030, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(s, "06-15-2024 10:00");
        assert_eq!(e, "06-15-2024 12:00");
    }

    #[test]
    fn test_relative_window_resolves_in_utc_by_default() {
        let now = utc(2024, 6, 15, 12, 0, 0);
        let (s, e) =
            resolve_window_at(&TimeSpec::Relative(-60), &TimeSpec::Now, None, now).unwrap();
        assert_eq!(s, "06-15-2024 11:00");
        assert_eq!(e, "06-15-2024 12:00");
    }

    #[test]
    fn test_default_timezone_matches_explicit_utc() {
        let now = utc(2024, 6, 15, 12, 30, 0);
        let default = resolve_window_at(&TimeSpec::Relative(-90), &TimeSpec::Now, None, now);
        let explicit =
            resolve_window_at(&TimeSpec::Relative(-90), &TimeSpec::Now, Some("UTC"), now);
        assert_eq!(default.unwrap(), explicit.unwrap());
    }

    #[test]
    fn test_relative_window_honors_timezone() {
        // 12:00 UTC is 08:00 in New York during DST.
        let now = utc(2024, 6, 15, 12, 0, 0);
        let (s, e) = resolve_window_at(
            &TimeSpec::Relative(-60),
            &TimeSpec::Now,
            Some("America/New_York"),
            now,
        )
        .unwrap();
        assert_eq!(s, "06-15-2024 07:00");
        assert_eq!(e, "06-15-2024 08:00");
    }

    #[test]
    fn test_relative_window_rolls_over_the_date() {
        // 23:30 UTC is already June 16th in Madrid (UTC+2 in summer).
        let now = utc(2024, 6, 15, 23, 30, 0);
        let (s, e) = resolve_window_at(
            &TimeSpec::Relative(-60),
            &TimeSpec::Now,
            Some("Europe/Madrid"),
            now,
        )
        .unwrap();
        assert_eq!(s, "06-16-2024 00:30");
        assert_eq!(e, "06-16-2024 01:30");
    }

    #[test]
    fn test_seconds_truncated_from_resolved_times() {
        let now = utc(2024, 6, 15, 12, 0, 42);
        let (_, e) =
            resolve_window_at(&TimeSpec::Relative(-5), &TimeSpec::Now, None, now).unwrap();
        assert_eq!(e, "06-15-2024 12:00");
    }

    #[test]
    fn test_relative_start_requires_now_end() {
        let end = TimeSpec::Absolute("06-15-2024 12:00".to_string());
        let result = resolve_window(&TimeSpec::Relative(-60), &end, None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_relative_start_must_be_negative() {
        for minutes in [0, 60] {
            let result = resolve_window(&TimeSpec::Relative(minutes), &TimeSpec::Now, None);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_out_of_range_relative_minutes_rejected() {
        // i64::MIN overflows TimeDelta; -300 billion minutes overflows the
        // representable date range.
        for minutes in [i64::MIN, -300_000_000_000] {
            let result = resolve_window(&TimeSpec::Relative(minutes), &TimeSpec::Now, None);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_absolute_start_with_now_end_rejected() {
        let start = TimeSpec::Absolute("06-15-2024 10:00".to_string());
        let result = resolve_window(&start, &TimeSpec::Now, None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_now_start_rejected() {
        let end = TimeSpec::Absolute("06-15-2024 12:00".to_string());
        let result = resolve_window(&TimeSpec::Now, &end, None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_timezone_rejected() {
        let result = resolve_window(&TimeSpec::Relative(-60), &TimeSpec::Now, Some("Nowhere/Land"));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_malformed_absolute_rejected() {
        // ISO ordering does not match the wire format.
        let start = TimeSpec::Absolute("2024-06-15 10:00".to_string());
        let end = TimeSpec::Absolute("06-15-2024 12:00".to_string());
        let result = resolve_window(&start, &end, None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_end_resolves_to_call_instant() {
        let truncate = |t: DateTime<Utc>| t.with_second(0).unwrap().with_nanosecond(0).unwrap();

        let before = Utc::now();
        let (_, end) = resolve_window(&TimeSpec::Relative(-5), &TimeSpec::Now, None).unwrap();
        let after = Utc::now();

        let end = NaiveDateTime::parse_from_str(&end, TIME_FORMAT)
            .unwrap()
            .and_utc();
        assert!(end >= truncate(before));
        assert!(end <= truncate(after));
    }
}
