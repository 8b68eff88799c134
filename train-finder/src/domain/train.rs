//! Scheduled train records.

use super::{StationId, TimeOfDay};

/// One scheduled trip between two stations.
///
/// Records are built once when the timetable is loaded and never change
/// afterwards. Nothing here requires the two stations to differ or the
/// price to be positive.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainRecord {
    /// Timetable identifier of the train.
    pub train_id: i64,

    /// Station the train leaves from.
    pub departure_station: StationId,

    /// Station the train arrives at.
    pub arrival_station: StationId,

    /// Ticket price.
    pub price: f64,

    /// Time of arrival at `arrival_station`.
    pub arrival_time: TimeOfDay,

    /// Time of departure from `departure_station`.
    pub departure_time: TimeOfDay,
}

impl TrainRecord {
    /// Whether this train runs from `departure` to `arrival`.
    pub fn connects(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dep: i64, arr: i64) -> TrainRecord {
        TrainRecord {
            train_id: 1,
            departure_station: StationId::new(dep),
            arrival_station: StationId::new(arr),
            price: 10.0,
            arrival_time: TimeOfDay::parse_hhmmss("10:00:00").unwrap(),
            departure_time: TimeOfDay::parse_hhmmss("09:00:00").unwrap(),
        }
    }

    #[test]
    fn connects_requires_both_ends() {
        let r = record(10, 20);
        assert!(r.connects(StationId::new(10), StationId::new(20)));
        assert!(!r.connects(StationId::new(10), StationId::new(99)));
        assert!(!r.connects(StationId::new(99), StationId::new(20)));
    }

    #[test]
    fn connects_is_directional() {
        let r = record(10, 20);
        assert!(!r.connects(StationId::new(20), StationId::new(10)));
    }

    #[test]
    fn self_loop_matches() {
        let r = record(5, 5);
        assert!(r.connects(StationId::new(5), StationId::new(5)));
    }
}
