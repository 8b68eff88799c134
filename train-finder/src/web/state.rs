//! Application state for the web layer.

use std::sync::Arc;

use crate::query::QueryConfig;
use crate::store::RecordStore;

/// Shared application state.
///
/// The timetable is loaded once at startup and only ever read afterwards,
/// so every request shares the same store without locking.
#[derive(Clone)]
pub struct AppState {
    /// Loaded timetable
    pub store: Arc<RecordStore>,

    /// Result limits
    pub config: Arc<QueryConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: RecordStore, config: QueryConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
