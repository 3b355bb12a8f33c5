//! Concurrent timetable loader.

use std::time::Duration;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::domain::{DirectionalTimetable, LineTimetables, TimetableSet};

use super::error::LoadError;
use super::sources::{DataSources, LineSource, Location};

/// Configuration for the timetable loader.
#[derive(Debug, Clone)]
pub struct TimetableLoaderConfig {
    /// Request timeout in seconds for remote documents. A timed-out
    /// document fails the whole load like any other fetch error.
    pub timeout_secs: u64,
}

impl Default for TimetableLoaderConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Loads directional timetables from files or URLs.
#[derive(Debug, Clone)]
pub struct TimetableLoader {
    http: reqwest::Client,
}

impl TimetableLoader {
    /// Create a new loader.
    pub fn new(config: TimetableLoaderConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Load every line in `sources`.
    ///
    /// All documents are requested concurrently. The set is returned only
    /// when every one of them has loaded and validated.
    pub async fn load_all(&self, sources: &DataSources) -> Result<TimetableSet, LoadError> {
        if sources.lines.is_empty() {
            return Err(LoadError::NoSources);
        }

        info!(
            lines = sources.lines.len(),
            documents = sources.document_count(),
            "loading timetables"
        );

        let lines = try_join_all(sources.lines.iter().map(|line| self.load_line(line))).await?;
        let set = TimetableSet::new(lines)?;

        for line in set.lines() {
            info!(
                line = %line.id,
                stations = line.canonical_stations().len(),
                down_trains = line.down.trains.len(),
                up_trains = line.up.trains.len(),
                "line loaded"
            );
        }

        Ok(set)
    }

    /// Load both directions of one line.
    async fn load_line(&self, line: &LineSource) -> Result<LineTimetables, LoadError> {
        let (down, up) = futures::try_join!(self.fetch(&line.down), self.fetch(&line.up))?;
        Ok(LineTimetables::new(&line.id, &line.name, down, up))
    }

    /// Fetch and validate one directional timetable.
    pub async fn fetch(&self, location: &Location) -> Result<DirectionalTimetable, LoadError> {
        debug!(%location, "fetching timetable");

        let body = match location {
            Location::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        location: location.clone(),
                        source,
                    })?
            }
            Location::Url(url) => self.fetch_remote(location, url).await?,
        };

        let timetable: DirectionalTimetable =
            serde_json::from_str(&body).map_err(|e| LoadError::Json {
                location: location.clone(),
                message: e.to_string(),
            })?;

        timetable.validate().map_err(|source| LoadError::Invalid {
            location: location.clone(),
            source,
        })?;

        Ok(timetable)
    }

    async fn fetch_remote(&self, location: &Location, url: &str) -> Result<String, LoadError> {
        let http_err = |source: reqwest::Error| LoadError::Http {
            location: location.clone(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(http_err)?;
        let status = response.status();

        if !status.is_success() {
            return Err(LoadError::Status {
                location: location.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(http_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    const DOWN: &str = r#"{
        "stations": ["金谷", "新金谷", "家山"],
        "trains": [
            {"trainNumber": "1", "type": "普通", "times": ["9:00", "9:05", "9:30"]},
            {"trainNumber": "3", "type": "普通", "times": ["10:00", null, "10:28"]}
        ]
    }"#;

    const UP: &str = r#"{
        "stations": ["家山", "新金谷", "金谷"],
        "trains": [
            {"trainNumber": "2", "type": "普通", "times": ["11:00", "11:25", "11:30"]}
        ]
    }"#;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    fn loader() -> TimetableLoader {
        TimetableLoader::new(TimetableLoaderConfig::default()).unwrap()
    }

    fn write_default_files(dir: &Path) {
        write(dir, "main-line-down.json", DOWN);
        write(dir, "main-line-up.json", UP);
        write(dir, "ikawa-line-down.json", DOWN);
        write(dir, "ikawa-line-up.json", UP);
    }

    #[tokio::test]
    async fn loads_all_lines_in_order() {
        let dir = tempdir().unwrap();
        write_default_files(dir.path());

        let set = loader()
            .load_all(&DataSources::default_in(dir.path()))
            .await
            .unwrap();

        let ids: Vec<_> = set.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["main", "ikawa"]);

        let main = set.line("main").unwrap();
        assert_eq!(main.name, "大井川本線");
        assert_eq!(main.down.trains.len(), 2);
        assert_eq!(main.up.stations[0], "家山");
    }

    #[tokio::test]
    async fn missing_file_fails_whole_load() {
        let dir = tempdir().unwrap();
        write_default_files(dir.path());
        std::fs::remove_file(dir.path().join("ikawa-line-up.json")).unwrap();

        let result = loader()
            .load_all(&DataSources::default_in(dir.path()))
            .await;

        match result {
            Err(LoadError::Io { location, .. }) => {
                assert!(location.to_string().ends_with("ikawa-line-up.json"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_json_fails() {
        let dir = tempdir().unwrap();
        write_default_files(dir.path());
        write(dir.path(), "main-line-down.json", "{ not json");

        let result = loader()
            .load_all(&DataSources::default_in(dir.path()))
            .await;

        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[tokio::test]
    async fn inconsistent_timetable_fails() {
        let dir = tempdir().unwrap();
        write_default_files(dir.path());
        write(
            dir.path(),
            "main-line-up.json",
            r#"{"stations": ["A", "B"], "trains": [{"trainNumber": "9", "type": "x", "times": ["9:00"]}]}"#,
        );

        let result = loader()
            .load_all(&DataSources::default_in(dir.path()))
            .await;

        assert!(matches!(result, Err(LoadError::Invalid { .. })));
    }

    #[tokio::test]
    async fn duplicate_line_ids_fail() {
        let dir = tempdir().unwrap();
        write_default_files(dir.path());

        let mut sources = DataSources::default_in(dir.path());
        sources.lines[1].id = "main".to_string();

        let result = loader().load_all(&sources).await;
        assert!(matches!(result, Err(LoadError::LineSet(_))));
    }

    #[tokio::test]
    async fn silent_remote_times_out_whole_load() {
        // Accepts connections through the backlog but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let dir = tempdir().unwrap();
        write(dir.path(), "up.json", UP);
        let sources = DataSources::new(vec![LineSource::new(
            "main",
            "大井川本線",
            Location::Url(format!("http://{addr}/down.json")),
            Location::Path(dir.path().join("up.json")),
        )]);

        let loader = TimetableLoader::new(TimetableLoaderConfig { timeout_secs: 1 }).unwrap();
        let result = loader.load_all(&sources).await;

        match result {
            Err(LoadError::Http { source, .. }) => assert!(source.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other.map(|set| set.len())),
        }
        drop(listener);
    }

    #[tokio::test]
    async fn empty_sources_fail() {
        let result = loader().load_all(&DataSources::default()).await;
        assert!(matches!(result, Err(LoadError::NoSources)));
    }
}
