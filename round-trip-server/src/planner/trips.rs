//! Single-direction trip lookup.
//!
//! Finds every train that serves an origin and a destination, in that
//! order, on one line. Stations are addressed by their position in the
//! line's canonical order; the directional timetable to consult is chosen
//! from those positions alone.

use crate::domain::{Direction, LineTimetables, TimeError, TimetableSet, parse_clock};

/// Error from a round-trip or trip search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Line identifier not present in the timetable set
    #[error("unknown line: {0}")]
    UnknownLine(String),

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// A clock string could not be parsed
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// One train's timed passage between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLeg {
    pub train_number: String,
    pub service_type: String,

    /// Departure time at the origin, as printed in the timetable.
    pub departure_clock: String,

    /// Arrival time at the destination, as printed in the timetable.
    pub arrival_clock: String,

    pub departure_mins: i64,
    pub arrival_mins: i64,
}

/// Find trains from `origin_pos` to `dest_pos` on a line.
///
/// Positions index the line's canonical station list. The result is sorted
/// by departure time; trains departing at the same minute keep timetable
/// order. An empty result is normal when a station is missing from the
/// chosen timetable or the timetable lists it after the destination.
pub fn find_trips(
    timetables: &TimetableSet,
    line: &str,
    origin_pos: usize,
    dest_pos: usize,
) -> Result<Vec<TripLeg>, SearchError> {
    let line = lookup_line(timetables, line)?;
    trips_on_line(line, origin_pos, dest_pos)
}

/// Look up a line or fail with `UnknownLine`.
pub(super) fn lookup_line<'a>(
    timetables: &'a TimetableSet,
    line: &str,
) -> Result<&'a LineTimetables, SearchError> {
    timetables
        .line(line)
        .ok_or_else(|| SearchError::UnknownLine(line.to_string()))
}

/// Canonical station name at a position, or `InvalidRequest` when out of range.
pub(super) fn station_at(line: &LineTimetables, pos: usize) -> Result<&str, SearchError> {
    line.canonical_stations()
        .get(pos)
        .map(String::as_str)
        .ok_or_else(|| {
            SearchError::InvalidRequest(format!(
                "station position {} out of range for line {} ({} stations)",
                pos,
                line.id,
                line.canonical_stations().len()
            ))
        })
}

pub(super) fn trips_on_line(
    line: &LineTimetables,
    origin_pos: usize,
    dest_pos: usize,
) -> Result<Vec<TripLeg>, SearchError> {
    let origin = station_at(line, origin_pos)?;
    let destination = station_at(line, dest_pos)?;
    let timetable = line.timetable(Direction::for_positions(origin_pos, dest_pos));

    let (Some(origin_row), Some(dest_row)) = (
        timetable.resolve_row_index(origin),
        timetable.resolve_row_index(destination),
    ) else {
        return Ok(Vec::new());
    };

    if origin_row >= dest_row {
        return Ok(Vec::new());
    }

    let mut legs = Vec::new();
    for train in &timetable.trains {
        let (Some(dep), Some(arr)) = (train.stop_at(origin_row), train.stop_at(dest_row)) else {
            continue;
        };

        legs.push(TripLeg {
            train_number: train.train_number.clone(),
            service_type: train.service_type.clone(),
            departure_clock: dep.to_string(),
            arrival_clock: arr.to_string(),
            departure_mins: parse_clock(dep)?,
            arrival_mins: parse_clock(arr)?,
        });
    }

    // Stable: equal departures keep timetable order
    legs.sort_by_key(|leg| leg.departure_mins);

    Ok(legs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectionalTimetable, LineTimetables, Train};

    fn train(number: &str, times: &[Option<&str>]) -> Train {
        Train {
            train_number: number.to_string(),
            service_type: "普通".to_string(),
            times: times.iter().map(|t| t.map(str::to_string)).collect(),
        }
    }

    fn timetable(stations: &[&str], trains: Vec<Train>) -> DirectionalTimetable {
        DirectionalTimetable::new(stations.iter().map(|s| s.to_string()).collect(), trains)
            .unwrap()
    }

    /// Canonical order A, B, C, D. Down trains are numbered odd, up trains even.
    fn line() -> TimetableSet {
        let down = timetable(
            &["A", "B", "C", "D"],
            vec![
                train("103", &[Some("10:00"), Some("10:10"), Some("10:20"), Some("10:30")]),
                train("101", &[Some("9:00"), None, Some("9:20"), Some("9:30")]),
                train("105", &[None, Some("11:10"), Some("11:20"), None]),
            ],
        );
        let up = timetable(
            &["D", "C", "B", "A"],
            vec![
                train("102", &[Some("12:00"), Some("12:10"), Some("12:20"), Some("12:30")]),
                train("104", &[Some("13:00"), Some("13:10"), None, Some("13:30")]),
            ],
        );
        TimetableSet::new(vec![LineTimetables::new("main", "本線", down, up)]).unwrap()
    }

    fn numbers(legs: &[TripLeg]) -> Vec<&str> {
        legs.iter().map(|l| l.train_number.as_str()).collect()
    }

    #[test]
    fn forward_positions_use_down_table() {
        let legs = find_trips(&line(), "main", 0, 3).unwrap();
        assert_eq!(numbers(&legs), vec!["101", "103"]);
    }

    #[test]
    fn backward_positions_use_up_table() {
        let legs = find_trips(&line(), "main", 3, 0).unwrap();
        assert_eq!(numbers(&legs), vec!["102", "104"]);
    }

    #[test]
    fn legs_carry_clocks_and_minutes() {
        let legs = find_trips(&line(), "main", 0, 2).unwrap();
        let first = &legs[0];

        assert_eq!(first.train_number, "101");
        assert_eq!(first.service_type, "普通");
        assert_eq!(first.departure_clock, "9:00");
        assert_eq!(first.arrival_clock, "9:20");
        assert_eq!(first.departure_mins, 540);
        assert_eq!(first.arrival_mins, 560);
    }

    #[test]
    fn null_stop_at_either_end_excluded() {
        // 101 skips B; 105 does not serve A
        let legs = find_trips(&line(), "main", 0, 1).unwrap();
        assert_eq!(numbers(&legs), vec!["103"]);

        // 104 skips B going up
        let legs = find_trips(&line(), "main", 1, 0).unwrap();
        assert_eq!(numbers(&legs), vec!["102"]);
    }

    #[test]
    fn sorted_by_departure() {
        let legs = find_trips(&line(), "main", 2, 3).unwrap();
        let deps: Vec<i64> = legs.iter().map(|l| l.departure_mins).collect();
        assert_eq!(deps, vec![560, 620]);
    }

    #[test]
    fn equal_departures_keep_timetable_order() {
        let down = timetable(
            &["A", "B"],
            vec![
                train("2", &[Some("9:00"), Some("9:30")]),
                train("1", &[Some("9:00"), Some("9:20")]),
                train("0", &[Some("8:00"), Some("8:20")]),
            ],
        );
        let up = timetable(&["B", "A"], vec![]);
        let set = TimetableSet::new(vec![LineTimetables::new("x", "x", down, up)]).unwrap();

        let legs = find_trips(&set, "x", 0, 1).unwrap();
        assert_eq!(numbers(&legs), vec!["0", "2", "1"]);
    }

    #[test]
    fn station_missing_from_directional_table_is_empty() {
        let down = timetable(
            &["A", "B", "C"],
            vec![train("1", &[Some("9:00"), Some("9:10"), Some("9:20")])],
        );
        // Up timetable omits B
        let up = timetable(&["C", "A"], vec![train("2", &[Some("10:00"), Some("10:20")])]);
        let set = TimetableSet::new(vec![LineTimetables::new("x", "x", down, up)]).unwrap();

        assert!(find_trips(&set, "x", 1, 0).unwrap().is_empty());
        assert_eq!(find_trips(&set, "x", 2, 0).unwrap().len(), 1);
    }

    #[test]
    fn row_order_guard_applies_even_when_both_resolve() {
        let down = timetable(&["A", "B"], vec![]);
        // Up timetable lists stations in the same order as down, so the
        // origin row follows the destination row for any upward trip.
        let up = timetable(&["A", "B"], vec![train("2", &[Some("10:00"), Some("10:20")])]);
        let set = TimetableSet::new(vec![LineTimetables::new("x", "x", down, up)]).unwrap();

        assert!(find_trips(&set, "x", 1, 0).unwrap().is_empty());
    }

    #[test]
    fn same_position_is_empty() {
        assert!(find_trips(&line(), "main", 2, 2).unwrap().is_empty());
    }

    #[test]
    fn unknown_line_is_error() {
        let result = find_trips(&line(), "ikawa", 0, 1);
        assert!(matches!(result, Err(SearchError::UnknownLine(id)) if id == "ikawa"));
    }

    #[test]
    fn out_of_range_position_is_error() {
        let result = find_trips(&line(), "main", 0, 9);
        assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
    }
}
