//! Domain error types.
//!
//! These errors represent inconsistencies in timetable data. They are
//! raised while a timetable is being loaded, never during a search.

use super::TimeError;

/// Validation failures for a directional timetable.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimetableError {
    /// A train lists a different number of stop times than there are stations
    #[error("train {train} has {times} stop times for {stations} stations")]
    StopCountMismatch {
        train: String,
        times: usize,
        stations: usize,
    },

    /// A stop time could not be parsed as a clock
    #[error("train {train} at {station}: {source}")]
    BadStopTime {
        train: String,
        station: String,
        #[source]
        source: TimeError,
    },

    /// The same line identifier was registered twice
    #[error("duplicate line: {0}")]
    DuplicateLine(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_clock;

    #[test]
    fn error_display() {
        let err = TimetableError::StopCountMismatch {
            train: "101".into(),
            times: 3,
            stations: 4,
        };
        assert_eq!(err.to_string(), "train 101 has 3 stop times for 4 stations");

        let err = TimetableError::BadStopTime {
            train: "101".into(),
            station: "家山".into(),
            source: parse_clock("noon").unwrap_err(),
        };
        assert_eq!(
            err.to_string(),
            "train 101 at 家山: invalid time: expected H:MM format"
        );

        let err = TimetableError::DuplicateLine("main".into());
        assert_eq!(err.to_string(), "duplicate line: main");
    }
}
