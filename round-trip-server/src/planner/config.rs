//! Search configuration for the round-trip planner.

/// Configuration parameters for round-trip search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum dwell at the destination for open-destination searches
    /// (minutes). Riders cannot change this.
    pub open_min_stay_mins: i64,

    /// Minimum dwell used by fixed-destination searches when the rider's
    /// value is missing or unreadable (minutes).
    pub default_fixed_min_stay_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(open_min_stay_mins: i64, default_fixed_min_stay_mins: i64) -> Self {
        Self {
            open_min_stay_mins,
            default_fixed_min_stay_mins,
        }
    }

    /// Minimum dwell for a fixed-destination search from raw rider input.
    ///
    /// Falls back to the default when the input is absent or not an integer.
    pub fn fixed_min_stay(&self, input: Option<&str>) -> i64 {
        input
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(self.default_fixed_min_stay_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            open_min_stay_mins: 10,
            default_fixed_min_stay_mins: 0,
        }
    }
}
