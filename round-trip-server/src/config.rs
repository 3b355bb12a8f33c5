//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Directory holding the four timetable documents.
pub const DATA_DIR_VAR: &str = "TIMETABLE_DATA_DIR";

/// Directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "STATIC_DIR";

/// Socket address to listen on.
pub const LISTEN_ADDR_VAR: &str = "LISTEN_ADDR";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    BadAddress {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings needed to start the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub listen_addr: SocketAddr,
}

impl ServerConfig {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset
    /// or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str, default: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let listen = get(LISTEN_ADDR_VAR, DEFAULT_LISTEN_ADDR);
        let listen_addr = listen
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BadAddress {
                var: LISTEN_ADDR_VAR,
                value: listen.clone(),
                source,
            })?;

        Ok(Self {
            data_dir: PathBuf::from(get(DATA_DIR_VAR, DEFAULT_DATA_DIR)),
            static_dir: PathBuf::from(get(STATIC_DIR_VAR, DEFAULT_STATIC_DIR)),
            listen_addr,
        })
    }
}
