//! Conversion between timetable DTOs and domain types.

use crate::domain::{StationId, TimeError, TimeOfDay, TrainRecord};

use super::types::TrainDto;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {source}")]
pub struct ConversionError {
    /// JSON name of the offending field.
    pub field: &'static str,
    #[source]
    pub source: TimeError,
}

impl TryFrom<TrainDto> for TrainRecord {
    type Error = ConversionError;

    fn try_from(dto: TrainDto) -> Result<Self, Self::Error> {
        let arrival_time = parse_time(&dto.arrival_time, "arrivalTime")?;
        let departure_time = parse_time(&dto.departure_time, "departureTime")?;

        Ok(TrainRecord {
            train_id: dto.train_id,
            departure_station: StationId::new(dto.departure_station_id),
            arrival_station: StationId::new(dto.arrival_station_id),
            price: dto.price,
            arrival_time,
            departure_time,
        })
    }
}

impl From<&TrainRecord> for TrainDto {
    fn from(record: &TrainRecord) -> Self {
        TrainDto {
            train_id: record.train_id,
            departure_station_id: record.departure_station.get(),
            arrival_station_id: record.arrival_station.get(),
            price: record.price,
            arrival_time: record.arrival_time.to_string(),
            departure_time: record.departure_time.to_string(),
        }
    }
}

fn parse_time(s: &str, field: &'static str) -> Result<TimeOfDay, ConversionError> {
    TimeOfDay::parse_hhmmss(s).map_err(|source| ConversionError { field, source })
}
