//! Domain types for the round-trip planner.
//!
//! This module contains the clock codec and the timetable data model.
//! Timetables are validated when constructed or loaded, so search code
//! that receives them can trust their shape.

mod error;
mod time;
mod timetable;

pub use error::TimetableError;
pub use time::{TimeError, format_clock, format_duration, minutes_of_day, parse_clock};
pub use timetable::{Direction, DirectionalTimetable, LineTimetables, TimetableSet, Train};
