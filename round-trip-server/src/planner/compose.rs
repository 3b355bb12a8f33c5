//! Round-trip composition.
//!
//! Pairs outbound trips with return trips under the rider's constraints.
//! Two kinds of search share the same pairing logic:
//!
//! - **Fixed destination**: origin, destination and a minimum dwell are
//!   given. Results are ordered by outbound departure.
//! - **Open destination**: only the origin and a time window are given.
//!   Every other station on the line is tried, and results are ordered
//!   farthest destination first.
//!
//! An empty result is never an error. It is reported as an `EmptyReason`
//! so the caller can explain what was missing.

use tracing::debug;

use crate::domain::{LineTimetables, TimeError, TimetableSet, parse_clock};

use super::config::SearchConfig;
use super::rank::{distinct_destinations, rank_by_departure, rank_by_distance};
use super::trips::{SearchError, TripLeg, lookup_line, station_at, trips_on_line};

/// One complete round trip: an outbound leg and a return leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripPattern {
    pub outbound: TripLeg,
    pub inbound: TripLeg,

    /// Minutes between arriving at and leaving the destination.
    pub dwell_mins: i64,

    /// Minutes from outbound departure to return arrival.
    pub total_mins: i64,

    /// Destination station name.
    pub destination: String,

    /// Distance from the origin in canonical station positions.
    pub distance: usize,
}

impl RoundTripPattern {
    /// Pair two legs, deriving dwell and total durations.
    pub fn new(
        outbound: TripLeg,
        inbound: TripLeg,
        destination: String,
        distance: usize,
    ) -> Self {
        let dwell_mins = inbound.departure_mins - outbound.arrival_mins;
        let total_mins = inbound.arrival_mins - outbound.departure_mins;
        Self {
            outbound,
            inbound,
            dwell_mins,
            total_mins,
            destination,
            distance,
        }
    }
}

/// Why a search produced no patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Origin and destination are the same station.
    SameStation,
    /// No train runs from the origin to the destination.
    NoOutbound,
    /// No train runs from the destination back to the origin.
    NoReturn,
    /// Trains exist but no pairing satisfies the constraints.
    NoPatterns,
}

/// Patterns found by a search, with summary fields for display.
#[derive(Debug, Clone)]
pub struct RoundTripSummary {
    /// Origin station name.
    pub origin: String,

    /// Departure lower bound actually applied, in minutes. Only set for
    /// open-destination searches.
    pub depart_after_mins: Option<i64>,

    /// Patterns in display order.
    pub patterns: Vec<RoundTripPattern>,

    /// Destination names in order of first appearance in `patterns`.
    pub destinations: Vec<String>,
}

impl RoundTripSummary {
    fn new(
        origin: &str,
        depart_after_mins: Option<i64>,
        patterns: Vec<RoundTripPattern>,
    ) -> Self {
        let destinations = distinct_destinations(&patterns);
        Self {
            origin: origin.to_string(),
            depart_after_mins,
            patterns,
            destinations,
        }
    }

    /// Number of patterns found.
    pub fn count(&self) -> usize {
        self.patterns.len()
    }
}

/// Result of a round-trip search.
#[derive(Debug, Clone)]
pub enum RoundTripOutcome {
    Found(RoundTripSummary),
    Empty(EmptyReason),
}

impl RoundTripOutcome {
    /// The summary, if any patterns were found.
    pub fn summary(&self) -> Option<&RoundTripSummary> {
        match self {
            RoundTripOutcome::Found(summary) => Some(summary),
            RoundTripOutcome::Empty(_) => None,
        }
    }

    /// The reason for an empty result, if empty.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            RoundTripOutcome::Found(_) => None,
            RoundTripOutcome::Empty(reason) => Some(*reason),
        }
    }
}

/// Request for a fixed-destination search.
#[derive(Debug, Clone)]
pub struct FixedDestinationRequest {
    pub line: String,
    pub origin_pos: usize,
    pub dest_pos: usize,
    pub min_stay_mins: i64,
}

impl FixedDestinationRequest {
    pub fn new(
        line: impl Into<String>,
        origin_pos: usize,
        dest_pos: usize,
        min_stay_mins: i64,
    ) -> Self {
        Self {
            line: line.into(),
            origin_pos,
            dest_pos,
            min_stay_mins,
        }
    }
}

/// Lower bound on outbound departure for an open-destination search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartAfter {
    /// The wall-clock time supplied with the search.
    Now,
    /// A fixed time, in minutes since midnight.
    At(i64),
}

impl DepartAfter {
    /// Parse "now" or a clock string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s == "now" {
            Ok(DepartAfter::Now)
        } else {
            parse_clock(s).map(DepartAfter::At)
        }
    }

    /// Minutes since midnight, substituting `now_mins` for `Now`.
    pub fn resolve(self, now_mins: i64) -> i64 {
        match self {
            DepartAfter::Now => now_mins,
            DepartAfter::At(mins) => mins,
        }
    }
}

/// Request for an open-destination search.
#[derive(Debug, Clone)]
pub struct OpenDestinationRequest {
    pub line: String,
    pub origin_pos: usize,
    pub depart_after: DepartAfter,

    /// Latest acceptable return arrival, in minutes since midnight.
    pub return_limit_mins: i64,
}

impl OpenDestinationRequest {
    pub fn new(
        line: impl Into<String>,
        origin_pos: usize,
        depart_after: DepartAfter,
        return_limit_mins: i64,
    ) -> Self {
        Self {
            line: line.into(),
            origin_pos,
            depart_after,
            return_limit_mins,
        }
    }
}

/// Round-trip planner over a loaded timetable set.
pub struct RoundTripPlanner<'a> {
    timetables: &'a TimetableSet,
    config: &'a SearchConfig,
}

impl<'a> RoundTripPlanner<'a> {
    /// Create a new planner.
    pub fn new(timetables: &'a TimetableSet, config: &'a SearchConfig) -> Self {
        Self { timetables, config }
    }

    /// Search round trips between a fixed origin and destination.
    pub fn search_fixed(
        &self,
        request: &FixedDestinationRequest,
    ) -> Result<RoundTripOutcome, SearchError> {
        let line = lookup_line(self.timetables, &request.line)?;
        let origin = station_at(line, request.origin_pos)?;
        let destination = station_at(line, request.dest_pos)?;

        debug!(
            line = %line.id,
            origin,
            destination,
            min_stay = request.min_stay_mins,
            "fixed-destination search"
        );

        if request.origin_pos == request.dest_pos {
            return Ok(RoundTripOutcome::Empty(EmptyReason::SameStation));
        }

        let outbound = trips_on_line(line, request.origin_pos, request.dest_pos)?;
        if outbound.is_empty() {
            return Ok(RoundTripOutcome::Empty(EmptyReason::NoOutbound));
        }

        let returns = trips_on_line(line, request.dest_pos, request.origin_pos)?;
        if returns.is_empty() {
            return Ok(RoundTripOutcome::Empty(EmptyReason::NoReturn));
        }

        let distance = request.origin_pos.abs_diff(request.dest_pos);
        let patterns = pair_legs(&outbound, &returns, destination, distance, |p| {
            p.dwell_mins >= request.min_stay_mins
        });

        debug!(
            outbound = outbound.len(),
            returns = returns.len(),
            patterns = patterns.len(),
            "fixed-destination search complete"
        );

        if patterns.is_empty() {
            return Ok(RoundTripOutcome::Empty(EmptyReason::NoPatterns));
        }

        let patterns = rank_by_departure(patterns);
        Ok(RoundTripOutcome::Found(RoundTripSummary::new(
            origin, None, patterns,
        )))
    }

    /// Search round trips from an origin to any other station on the line.
    ///
    /// `now_mins` is the current wall-clock time, used when the request
    /// departs "now".
    pub fn search_open(
        &self,
        request: &OpenDestinationRequest,
        now_mins: i64,
    ) -> Result<RoundTripOutcome, SearchError> {
        let line = lookup_line(self.timetables, &request.line)?;
        let origin = station_at(line, request.origin_pos)?;
        let depart_after = request.depart_after.resolve(now_mins);
        let min_stay = self.config.open_min_stay_mins;

        debug!(
            line = %line.id,
            origin,
            depart_after,
            return_limit = request.return_limit_mins,
            "open-destination search"
        );

        let mut patterns = Vec::new();
        for (dest_pos, distance) in candidates(line, request.origin_pos) {
            let destination = station_at(line, dest_pos)?;

            let outbound: Vec<TripLeg> = trips_on_line(line, request.origin_pos, dest_pos)?
                .into_iter()
                .filter(|leg| leg.departure_mins >= depart_after)
                .collect();
            let returns = trips_on_line(line, dest_pos, request.origin_pos)?;

            patterns.extend(pair_legs(&outbound, &returns, destination, distance, |p| {
                p.dwell_mins >= min_stay && p.inbound.arrival_mins <= request.return_limit_mins
            }));
        }

        debug!(patterns = patterns.len(), "open-destination search complete");

        if patterns.is_empty() {
            return Ok(RoundTripOutcome::Empty(EmptyReason::NoPatterns));
        }

        let patterns = rank_by_distance(patterns);
        Ok(RoundTripOutcome::Found(RoundTripSummary::new(
            origin,
            Some(depart_after),
            patterns,
        )))
    }
}

/// Every station other than the origin with its distance, farthest first.
fn candidates(line: &LineTimetables, origin_pos: usize) -> Vec<(usize, usize)> {
    let mut candidates: Vec<(usize, usize)> = (0..line.canonical_stations().len())
        .filter(|&pos| pos != origin_pos)
        .map(|pos| (pos, pos.abs_diff(origin_pos)))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates
}

/// Cross product of outbound and return legs, keeping pairs with a positive
/// total duration that also satisfy `accept`.
fn pair_legs(
    outbound: &[TripLeg],
    returns: &[TripLeg],
    destination: &str,
    distance: usize,
    accept: impl Fn(&RoundTripPattern) -> bool,
) -> Vec<RoundTripPattern> {
    let mut patterns = Vec::new();
    for out in outbound {
        for ret in returns {
            let pattern =
                RoundTripPattern::new(out.clone(), ret.clone(), destination.to_string(), distance);
            if pattern.total_mins > 0 && accept(&pattern) {
                patterns.push(pattern);
            }
        }
    }
    patterns
}
