//! Timetable data model.
//!
//! A line has two directional timetables. Each lists its own station rows
//! and, per train, one optional stop time per row. Station selection always
//! uses the canonical order, which is the station list of the down timetable;
//! the up timetable may list the same stations in another order or omit some.

use serde::{Deserialize, Serialize};

use super::error::TimetableError;
use super::time::parse_clock;

/// Direction of travel along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// Direction serving a trip between two canonical positions.
    ///
    /// Down when the origin precedes the destination, up otherwise.
    pub fn for_positions(origin_pos: usize, dest_pos: usize) -> Self {
        if origin_pos < dest_pos {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// A train within one directional timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// Train number, not necessarily numeric.
    pub train_number: String,

    /// Free-text service type label.
    #[serde(rename = "type")]
    pub service_type: String,

    /// One entry per station row; `None` where the train does not stop.
    pub times: Vec<Option<String>>,
}

impl Train {
    /// Stop time at a station row, if the train stops there.
    pub fn stop_at(&self, row: usize) -> Option<&str> {
        self.times.get(row).and_then(|t| t.as_deref())
    }
}

/// The down or up schedule of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalTimetable {
    /// Station names in this timetable's own row order.
    pub stations: Vec<String>,

    /// Trains in encounter order.
    pub trains: Vec<Train>,
}

impl DirectionalTimetable {
    /// Create a timetable, checking every train against the station rows.
    pub fn new(stations: Vec<String>, trains: Vec<Train>) -> Result<Self, TimetableError> {
        let timetable = Self { stations, trains };
        timetable.validate()?;
        Ok(timetable)
    }

    /// Check that each train has one entry per station and that every
    /// present stop time is a readable clock.
    pub fn validate(&self) -> Result<(), TimetableError> {
        for train in &self.trains {
            if train.times.len() != self.stations.len() {
                return Err(TimetableError::StopCountMismatch {
                    train: train.train_number.clone(),
                    times: train.times.len(),
                    stations: self.stations.len(),
                });
            }

            for (station, time) in self.stations.iter().zip(&train.times) {
                if let Some(time) = time {
                    parse_clock(time).map_err(|source| TimetableError::BadStopTime {
                        train: train.train_number.clone(),
                        station: station.clone(),
                        source,
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Row index of a station within this timetable.
    ///
    /// Returns `None` when the station is not listed.
    pub fn resolve_row_index(&self, station: &str) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }
}

/// Both directional timetables of one line.
#[derive(Debug, Clone)]
pub struct LineTimetables {
    /// Line identifier, e.g. "main".
    pub id: String,

    /// Human-readable line name.
    pub name: String,

    pub down: DirectionalTimetable,
    pub up: DirectionalTimetable,
}

impl LineTimetables {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        down: DirectionalTimetable,
        up: DirectionalTimetable,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            down,
            up,
        }
    }

    /// The timetable for a direction.
    pub fn timetable(&self, direction: Direction) -> &DirectionalTimetable {
        match direction {
            Direction::Down => &self.down,
            Direction::Up => &self.up,
        }
    }

    /// Canonical station order: the down timetable's station rows.
    pub fn canonical_stations(&self) -> &[String] {
        &self.down.stations
    }
}

/// All loaded lines. Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TimetableSet {
    lines: Vec<LineTimetables>,
}

impl TimetableSet {
    /// Build a set from lines in display order.
    pub fn new(lines: Vec<LineTimetables>) -> Result<Self, TimetableError> {
        for (i, line) in lines.iter().enumerate() {
            if lines[..i].iter().any(|other| other.id == line.id) {
                return Err(TimetableError::DuplicateLine(line.id.clone()));
            }
        }
        Ok(Self { lines })
    }

    /// Look up a line by identifier.
    pub fn line(&self, id: &str) -> Option<&LineTimetables> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// All lines in display order.
    pub fn lines(&self) -> &[LineTimetables] {
        &self.lines
    }

    /// Canonical station order for a line.
    pub fn canonical_stations(&self, id: &str) -> Option<&[String]> {
        self.line(id).map(|l| l.canonical_stations())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
