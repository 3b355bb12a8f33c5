//! Timetable loading error types.

use crate::domain::TimetableError;

use super::sources::Location;

/// Errors that can occur while loading timetables.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// HTTP request failed
    #[error("HTTP error fetching {location}: {source}")]
    Http {
        location: Location,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("HTTP status {status} fetching {location}")]
    Status { location: Location, status: u16 },

    /// Local file could not be read
    #[error("failed to read {location}: {source}")]
    Io {
        location: Location,
        #[source]
        source: std::io::Error,
    },

    /// Body was not a timetable document
    #[error("JSON parse error in {location}: {message}")]
    Json { location: Location, message: String },

    /// Timetable parsed but is internally inconsistent
    #[error("invalid timetable {location}: {source}")]
    Invalid {
        location: Location,
        #[source]
        source: TimetableError,
    },

    /// Lines could not be assembled into a set
    #[error("invalid line set: {0}")]
    LineSet(#[from] TimetableError),

    /// No lines were configured
    #[error("no timetable sources configured")]
    NoSources,
}
