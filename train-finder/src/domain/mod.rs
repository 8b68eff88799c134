//! Domain types for the train finder.
//!
//! These types represent validated timetable data. All of them enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod criterion;
mod station;
mod time;
mod train;

pub use criterion::{Criterion, InvalidCriterion};
pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimeOfDay};
pub use train::TrainRecord;
