//! Where timetables come from.

use std::fmt;
use std::path::{Path, PathBuf};

/// Location of one directional timetable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// File on the local filesystem.
    Path(PathBuf),
    /// Document fetched over HTTP(S).
    Url(String),
}

impl Location {
    /// Interpret a string as a URL when it has an http(s) scheme, otherwise
    /// as a filesystem path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Location::Url(s.to_string())
        } else {
            Location::Path(PathBuf::from(s))
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => write!(f, "{}", path.display()),
            Location::Url(url) => f.write_str(url),
        }
    }
}

/// The two timetable documents of one line.
#[derive(Debug, Clone)]
pub struct LineSource {
    /// Line identifier used in requests.
    pub id: String,
    /// Display name.
    pub name: String,
    pub down: Location,
    pub up: Location,
}

impl LineSource {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        down: Location,
        up: Location,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            down,
            up,
        }
    }
}

/// All lines to load, in display order.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    pub lines: Vec<LineSource>,
}

impl DataSources {
    pub fn new(lines: Vec<LineSource>) -> Self {
        Self { lines }
    }

    /// The Ōigawa deployment: main line and Ikawa line, four files in `dir`.
    pub fn default_in(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let file = |name: &str| Location::Path(dir.join(name));

        Self::new(vec![
            LineSource::new(
                "main",
                "大井川本線",
                file("main-line-down.json"),
                file("main-line-up.json"),
            ),
            LineSource::new(
                "ikawa",
                "井川線",
                file("ikawa-line-down.json"),
                file("ikawa-line-up.json"),
            ),
        ])
    }

    /// Number of documents a full load fetches.
    pub fn document_count(&self) -> usize {
        self.lines.len() * 2
    }
}
