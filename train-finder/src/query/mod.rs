//! Query engine.
//!
//! Answers one question: which trains run from this station to that one,
//! best first by the chosen criterion. The engine filters the store with an
//! exact match on both stations, then stable-sorts the matches. Truncation
//! to a top-N is left to the caller.

mod config;
mod engine;
mod rank;
mod request;

pub use config::{DEFAULT_MAX_RESULTS, QueryConfig, RESULT_LIMIT_CAP};
pub use engine::query;
pub use rank::{Comparator, comparator, rank, top_n};
pub use request::{QueryRequest, RequestError};
