//! Application configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::query::QueryConfig;

/// Timetable file read when none is given.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Address the HTTP front end listens on when none is given.
pub const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::LOCALHOST),
    3000,
);

/// Settings shared by the terminal and HTTP front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Path of the JSON timetable.
    pub data_path: PathBuf,

    /// Address for `serve`.
    pub listen_addr: SocketAddr,

    /// Result limits.
    pub query: QueryConfig,
}

impl FinderConfig {
    /// Set the timetable path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set the listen address.
    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    /// Set the default number of results shown.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.query.max_results = max_results;
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            listen_addr: DEFAULT_LISTEN_ADDR,
            query: QueryConfig::default(),
        }
    }
}
