//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::TimetableSet;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The timetable set is loaded once before the server starts and never
/// changes, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// All loaded lines
    pub timetables: Arc<TimetableSet>,

    /// Round-trip search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetables: TimetableSet, config: SearchConfig) -> Self {
        Self {
            timetables: Arc::new(timetables),
            config: Arc::new(config),
        }
    }
}
