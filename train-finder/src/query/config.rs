//! Result limits for queries.

/// Default number of trains shown for a query.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Upper bound on a caller-supplied result limit.
pub const RESULT_LIMIT_CAP: usize = 50;

/// How many results a front end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Results shown when the caller does not ask for a specific number.
    pub max_results: usize,

    /// Largest limit a caller may request.
    pub limit_cap: usize,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, limit_cap: usize) -> Self {
        Self {
            max_results,
            limit_cap,
        }
    }

    /// Resolve a requested limit against this configuration.
    ///
    /// `None` means the default; anything above the cap is clamped.
    pub fn limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.max_results).min(self.limit_cap)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            limit_cap: RESULT_LIMIT_CAP,
        }
    }
}
