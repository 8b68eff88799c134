//! Timetable wire format.
//!
//! These types map directly to the JSON timetable file. The same shape is
//! used when records are written back out, so output mirrors input.

use serde::{Deserialize, Serialize};

/// One record as it appears in the timetable JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDto {
    /// Train identifier.
    pub train_id: i64,

    /// Station the train leaves from.
    pub departure_station_id: i64,

    /// Station the train arrives at.
    pub arrival_station_id: i64,

    /// Ticket price.
    pub price: f64,

    /// Arrival time, "HH:MM:SS".
    pub arrival_time: String,

    /// Departure time, "HH:MM:SS".
    pub departure_time: String,
}
