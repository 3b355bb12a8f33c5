//! Clock time handling for timetable data.
//!
//! Timetables provide stop times as "H:MM" or "HH:MM" strings. All search
//! arithmetic happens on integer minutes since midnight, so this module
//! converts between the two and renders durations for display.

use chrono::{NaiveTime, Timelike};

/// Error returned when parsing an invalid clock string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a clock string into minutes since midnight.
///
/// The hour and minute parts are split on the first colon and read as
/// unsigned integers. No range check is applied, so "25:00" yields 1500,
/// but values too large to represent are rejected.
///
/// # Examples
///
/// ```
/// use round_trip_server::domain::parse_clock;
///
/// assert_eq!(parse_clock("09:05").unwrap(), 545);
/// assert_eq!(parse_clock("9:05").unwrap(), 545);
/// assert!(parse_clock("0905").is_err());
/// ```
pub fn parse_clock(s: &str) -> Result<i64, TimeError> {
    let (hour, minute) = s
        .split_once(':')
        .ok_or_else(|| TimeError::new("expected H:MM format"))?;

    let hour = digits(hour, "invalid hour digits")?;
    let minute = digits(minute, "invalid minute digits")?;

    hour.checked_mul(60)
        .and_then(|h| h.checked_add(minute))
        .ok_or_else(|| TimeError::new("time out of range"))
}

/// Unsigned decimal digits only; a sign is not accepted.
fn digits(part: &str, reason: &'static str) -> Result<i64, TimeError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::new(reason));
    }
    part.parse().map_err(|_| TimeError::new("time out of range"))
}

/// Format minutes since midnight as "HH:MM".
///
/// Values of a day or more are not wrapped: 1500 renders as "25:00".
///
/// # Examples
///
/// ```
/// use round_trip_server::domain::format_clock;
///
/// assert_eq!(format_clock(545), "09:05");
/// assert_eq!(format_clock(0), "00:00");
/// ```
pub fn format_clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Render a positive duration in minutes as "{H}時間{M}分", or "{M}分"
/// when it is under an hour.
///
/// # Examples
///
/// ```
/// use round_trip_server::domain::format_duration;
///
/// assert_eq!(format_duration(59), "59分");
/// assert_eq!(format_duration(125), "2時間5分");
/// ```
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}時間{mins}分")
    } else {
        format!("{mins}分")
    }
}

/// Minutes since midnight for a wall-clock time, ignoring seconds.
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Format then parse returns the original minutes
        #[test]
        fn format_parse_roundtrip(minutes in 0i64..1440) {
            prop_assert_eq!(parse_clock(&format_clock(minutes)).unwrap(), minutes);
        }

        /// Unpadded hours parse the same as padded ones
        #[test]
        fn unpadded_hour_parses(hour in 0i64..10, minute in 0i64..60) {
            let padded = format!("{:02}:{:02}", hour, minute);
            let unpadded = format!("{}:{:02}", hour, minute);
            prop_assert_eq!(parse_clock(&padded).unwrap(), parse_clock(&unpadded).unwrap());
        }

        /// Durations of an hour or more always mention hours
        #[test]
        fn duration_hours_shown(minutes in 60i64..10_000) {
            let s = format_duration(minutes);
            let expected = format!("{}時間{}分", minutes / 60, minutes % 60);
            prop_assert!(s.contains("時間"));
            prop_assert_eq!(s, expected);
        }

        /// minutes_of_day agrees with format_clock
        #[test]
        fn minutes_of_day_matches_clock(hour in 0u32..24, minute in 0u32..60) {
            let t = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            prop_assert_eq!(
                format_clock(minutes_of_day(t)),
                format!("{:02}:{:02}", hour, minute)
            );
        }
    }
}
