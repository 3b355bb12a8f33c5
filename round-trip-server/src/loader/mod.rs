//! Timetable loading.
//!
//! Every directional timetable of every configured line is requested at
//! once, and a `TimetableSet` is only produced after all of them have
//! arrived and validated. A single failure fails the whole load.

mod client;
mod error;
mod sources;

pub use client::{TimetableLoader, TimetableLoaderConfig};
pub use error::LoadError;
pub use sources::{DataSources, LineSource, Location};
