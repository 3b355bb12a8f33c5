//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineTimetables, format_clock, format_duration};
use crate::planner::{EmptyReason, RoundTripOutcome, RoundTripPattern, TripLeg};

/// Request for a fixed-destination round-trip search.
#[derive(Debug, Deserialize)]
pub struct FixedSearchRequest {
    /// Line identifier
    pub line: String,

    /// Origin position in the canonical station list
    pub origin: usize,

    /// Destination position in the canonical station list
    pub destination: usize,

    /// Minimum stay in minutes; anything unreadable means the default
    pub min_stay: Option<String>,
}

/// Request for an open-destination round-trip search.
#[derive(Debug, Deserialize)]
pub struct OpenSearchRequest {
    /// Line identifier
    pub line: String,

    /// Origin position in the canonical station list
    pub origin: usize,

    /// "now" or a clock time (defaults to now)
    pub depart_after: Option<String>,

    /// Latest return arrival as a clock time (defaults to 17:00)
    pub return_limit: Option<String>,
}

/// A line in the line list.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub id: String,
    pub name: String,
    pub station_count: usize,
}

/// Response listing all lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// A station in the canonical station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Position used in search requests
    pub position: usize,

    pub name: String,
}

/// Response listing a line's stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub line: String,
    pub stations: Vec<StationResult>,
}

/// One choice in a time picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOption {
    /// Value to send back in search requests
    pub value: String,

    /// Text to show
    pub label: String,
}

/// Contents of the departure and return time pickers.
#[derive(Debug, Serialize)]
pub struct TimeOptionsResponse {
    pub depart_after: Vec<TimeOption>,
    pub return_limit: Vec<TimeOption>,
    pub default_depart_after: String,
    pub default_return_limit: String,
}

/// A train leg in a round trip.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub train_number: String,

    /// Service type label
    #[serde(rename = "type")]
    pub service_type: String,

    /// Departure time as printed in the timetable
    pub departure: String,

    /// Arrival time as printed in the timetable
    pub arrival: String,

    pub departure_mins: i64,
    pub arrival_mins: i64,
}

/// A complete round trip.
#[derive(Debug, Serialize)]
pub struct PatternResult {
    /// Destination station name
    pub destination: String,

    /// Distance from origin in station positions
    pub distance: usize,

    pub outbound: LegResult,

    #[serde(rename = "return")]
    pub inbound: LegResult,

    /// Stay at the destination in minutes
    pub dwell_mins: i64,

    /// Stay at the destination, formatted for display
    pub dwell: String,

    /// Whole round trip in minutes
    pub total_mins: i64,

    /// Whole round trip, formatted for display
    pub total: String,
}

/// Response for a round-trip search.
///
/// Empty results are successful responses with a status explaining why.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundTripResponse {
    Found {
        /// Origin station name
        origin: String,

        /// Departure bound applied, for open-destination searches
        depart_after: Option<String>,

        /// Number of patterns
        count: usize,

        /// Destination names in display order
        destinations: Vec<String>,

        patterns: Vec<PatternResult>,
    },
    SameStation,
    NoOutbound,
    NoReturn,
    NoPatterns,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl LineResult {
    pub fn from_line(line: &LineTimetables) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            station_count: line.canonical_stations().len(),
        }
    }
}

impl StationsResponse {
    pub fn from_line(line: &LineTimetables) -> Self {
        let stations = line
            .canonical_stations()
            .iter()
            .enumerate()
            .map(|(position, name)| StationResult {
                position,
                name: name.clone(),
            })
            .collect();

        Self {
            line: line.id.clone(),
            stations,
        }
    }
}

impl LegResult {
    pub fn from_leg(leg: &TripLeg) -> Self {
        Self {
            train_number: leg.train_number.clone(),
            service_type: leg.service_type.clone(),
            departure: leg.departure_clock.clone(),
            arrival: leg.arrival_clock.clone(),
            departure_mins: leg.departure_mins,
            arrival_mins: leg.arrival_mins,
        }
    }
}

impl PatternResult {
    pub fn from_pattern(pattern: &RoundTripPattern) -> Self {
        Self {
            destination: pattern.destination.clone(),
            distance: pattern.distance,
            outbound: LegResult::from_leg(&pattern.outbound),
            inbound: LegResult::from_leg(&pattern.inbound),
            dwell_mins: pattern.dwell_mins,
            dwell: format_duration(pattern.dwell_mins),
            total_mins: pattern.total_mins,
            total: format_duration(pattern.total_mins),
        }
    }
}

impl RoundTripResponse {
    pub fn from_outcome(outcome: &RoundTripOutcome) -> Self {
        match outcome {
            RoundTripOutcome::Found(summary) => RoundTripResponse::Found {
                origin: summary.origin.clone(),
                depart_after: summary.depart_after_mins.map(format_clock),
                count: summary.count(),
                destinations: summary.destinations.clone(),
                patterns: summary
                    .patterns
                    .iter()
                    .map(PatternResult::from_pattern)
                    .collect(),
            },
            RoundTripOutcome::Empty(EmptyReason::SameStation) => RoundTripResponse::SameStation,
            RoundTripOutcome::Empty(EmptyReason::NoOutbound) => RoundTripResponse::NoOutbound,
            RoundTripOutcome::Empty(EmptyReason::NoReturn) => RoundTripResponse::NoReturn,
            RoundTripOutcome::Empty(EmptyReason::NoPatterns) => RoundTripResponse::NoPatterns,
        }
    }
}
