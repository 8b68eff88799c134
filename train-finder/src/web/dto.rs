//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query string for `GET /trains`.
///
/// Values arrive as raw strings so they go through the same validation,
/// and produce the same messages, as terminal input.
#[derive(Debug, Deserialize)]
pub struct TrainsRequest {
    /// Departure station id
    pub departure: String,

    /// Arrival station id
    pub arrival: String,

    /// One of `price`, `arrival-time`, `departure-time`
    pub criteria: String,

    /// Maximum number of trains to return
    pub limit: Option<usize>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
