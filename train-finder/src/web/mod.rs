//! Web layer for the train finder.
//!
//! Serves the query engine over HTTP from a timetable loaded once at
//! startup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router, serve};
pub use state::AppState;
