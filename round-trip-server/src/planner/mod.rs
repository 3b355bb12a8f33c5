//! Round-trip planner.
//!
//! This module answers: "Starting from this station, which trains can I
//! take out and back, and how long can I stay?"
//!
//! Trip lookup finds the trains between two stations in one direction.
//! Composition pairs an outbound trip with a return trip, filters the
//! pairs by dwell and time window, and ranks what remains.

mod compose;
mod config;
mod rank;
mod trips;


pub use compose::{
    DepartAfter, EmptyReason, FixedDestinationRequest, OpenDestinationRequest, RoundTripOutcome,
    RoundTripPattern, RoundTripPlanner, RoundTripSummary,
};
pub use config::SearchConfig;
pub use rank::{distinct_destinations, rank_by_departure, rank_by_distance};
pub use trips::{SearchError, TripLeg, find_trips};
