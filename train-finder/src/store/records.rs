//! In-memory timetable.

use std::path::Path;

use tracing::info;

use crate::domain::TrainRecord;

use super::error::LoadError;
use super::types::TrainDto;

/// All loaded train records, in source order.
///
/// The store is immutable once built and can be shared freely between
/// threads (e.g. behind an `Arc`) for concurrent queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<TrainRecord>,
}

impl RecordStore {
    /// Build a store from already validated records.
    pub fn new(records: Vec<TrainRecord>) -> Self {
        Self { records }
    }

    /// Decode a JSON timetable buffer.
    ///
    /// Every record must decode and every time must be "HH:MM:SS"; the first
    /// failure aborts the load.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::store::RecordStore;
    ///
    /// let json = br#"[{"trainId": 1, "departureStationId": 10, "arrivalStationId": 20,
    ///     "price": 50.0, "arrivalTime": "09:00:00", "departureTime": "08:00:00"}]"#;
    /// let store = RecordStore::load(json).unwrap();
    /// assert_eq!(store.len(), 1);
    ///
    /// let bad = br#"[{"trainId": 1, "departureStationId": 10, "arrivalStationId": 20,
    ///     "price": 50.0, "arrivalTime": "9am", "departureTime": "08:00:00"}]"#;
    /// assert!(RecordStore::load(bad).is_err());
    /// ```
    pub fn load(bytes: &[u8]) -> Result<Self, LoadError> {
        let dtos: Vec<TrainDto> = serde_json::from_slice(bytes)?;

        let records = dtos
            .into_iter()
            .enumerate()
            .map(|(index, dto)| {
                TrainRecord::try_from(dto)
                    .map_err(|source| LoadError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// Read a timetable file and decode it.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::load(&bytes)?;
        info!(path = %path.display(), records = store.len(), "loaded timetable");
        Ok(store)
    }

    /// Records in source order.
    pub fn records(&self) -> &[TrainRecord] {
        &self.records
    }

    /// Iterate over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrainRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a TrainRecord;
    type IntoIter = std::slice::Iter<'a, TrainRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dto_strategy() -> impl Strategy<Value = TrainDto> {
        (
            any::<i64>(),
            -5i64..5,
            -5i64..5,
            -100_000i64..100_000,
            (0u8..24, 0u8..60, 0u8..60),
            (0u8..24, 0u8..60, 0u8..60),
        )
            .prop_map(|(id, dep, arr, cents, a, d)| TrainDto {
                train_id: id,
                departure_station_id: dep,
                arrival_station_id: arr,
                price: cents as f64 / 100.0,
                arrival_time: format!("{:02}:{:02}:{:02}", a.0, a.1, a.2),
                departure_time: format!("{:02}:{:02}:{:02}", d.0, d.1, d.2),
            })
    }

    proptest! {
        /// Store size equals the number of well-formed input records
        #[test]
        fn load_keeps_every_record(dtos in prop::collection::vec(dto_strategy(), 0..30)) {
            let bytes = serde_json::to_vec(&dtos).unwrap();
            let store = RecordStore::load(&bytes).unwrap();

            prop_assert_eq!(store.len(), dtos.len());
            for (record, dto) in store.iter().zip(&dtos) {
                prop_assert_eq!(&TrainDto::from(record), dto);
            }
        }
    }
}
