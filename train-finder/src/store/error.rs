//! Timetable loading errors.

use std::path::PathBuf;

use super::convert::ConversionError;

/// Errors that can occur while loading a timetable.
///
/// Any of these aborts the whole load; no partial store is produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Timetable file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Buffer is not a JSON array of well-formed records
    #[error("malformed timetable: {0}")]
    Json(#[from] serde_json::Error),

    /// A record decoded but one of its fields is invalid
    #[error("record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ConversionError,
    },
}
