//! Timetable loading.
//!
//! Decodes a JSON timetable into an immutable [`RecordStore`]. Decoding goes
//! through wire DTOs first, then each DTO is converted into a validated
//! [`TrainRecord`](crate::domain::TrainRecord).

mod convert;
mod error;
mod records;
mod types;

pub use convert::ConversionError;
pub use error::LoadError;
pub use records::RecordStore;
pub use types::TrainDto;
