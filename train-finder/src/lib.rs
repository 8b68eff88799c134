//! Train finder.
//!
//! Loads a timetable of scheduled trains and answers: "which trains run
//! from this station to that one, best first by price, arrival time or
//! departure time?"

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod store;
pub mod web;

pub use config::FinderConfig;
pub use error::{FinderError, Result};
