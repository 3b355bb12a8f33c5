//! Web layer for the round-trip planner.
//!
//! Provides JSON endpoints for populating the station and time pickers and
//! for running both kinds of round-trip search.

mod dto;
mod options;
mod routes;
mod state;

pub use dto::*;
pub use options::{DEFAULT_DEPART_AFTER, DEFAULT_RETURN_LIMIT, time_options};
pub use routes::{AppError, create_router};
pub use state::AppState;
