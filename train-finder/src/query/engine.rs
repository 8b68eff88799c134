//! Filter-and-rank over a loaded timetable.

use tracing::debug;

use crate::domain::TrainRecord;
use crate::store::RecordStore;

use super::rank::rank;
use super::request::QueryRequest;

/// Find every train from `request.departure` to `request.arrival`, ordered
/// by `request.criterion`.
///
/// The result borrows from the store and is never truncated; callers take
/// their own prefix with [`top_n`](super::top_n). No match is an empty
/// result, not an error.
///
/// # Examples
///
/// ```
/// use train_finder::domain::{Criterion, StationId};
/// use train_finder::query::{QueryRequest, query};
/// use train_finder::store::RecordStore;
///
/// let json = br#"[
///     {"trainId": 1, "departureStationId": 10, "arrivalStationId": 20,
///      "price": 50.0, "arrivalTime": "09:00:00", "departureTime": "08:00:00"},
///     {"trainId": 2, "departureStationId": 10, "arrivalStationId": 20,
///      "price": 30.0, "arrivalTime": "10:00:00", "departureTime": "08:30:00"}
/// ]"#;
/// let store = RecordStore::load(json).unwrap();
///
/// let request = QueryRequest::new(StationId::new(10), StationId::new(20), Criterion::Price);
/// let ids: Vec<i64> = query(&store, &request).iter().map(|r| r.train_id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub fn query<'a>(store: &'a RecordStore, request: &QueryRequest) -> Vec<&'a TrainRecord> {
    let mut matches: Vec<&TrainRecord> = store
        .iter()
        .filter(|record| record.connects(request.departure, request.arrival))
        .collect();

    rank(&mut matches, request.criterion);

    debug!(
        departure = %request.departure,
        arrival = %request.arrival,
        criterion = %request.criterion,
        matches = matches.len(),
        "query complete"
    );

    matches
}
