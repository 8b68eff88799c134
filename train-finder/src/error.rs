//! Top-level error type.

use crate::cli::InputError;
use crate::query::RequestError;
use crate::store::LoadError;

/// Any failure surfaced by the front ends.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// Query parameters were rejected
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Answers could not be read from the terminal
    #[error(transparent)]
    Input(#[from] InputError),

    /// Timetable could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Results could not be serialised
    #[error("failed to render results: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing output or running the server failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for front-end operations.
pub type Result<T, E = FinderError> = std::result::Result<T, E>;
