//! Query parameters and their validation.

use crate::domain::{Criterion, InvalidCriterion, InvalidStationId, StationId};

/// Rejected query parameters.
///
/// These are raised before the engine runs; the engine itself only ever
/// sees a valid [`QueryRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Criterion outside the supported set
    #[error("unsupported criteria")]
    UnsupportedCriterion(#[source] InvalidCriterion),

    /// Arrival station is not an integer
    #[error("bad arrival station input")]
    BadArrivalStation(#[source] InvalidStationId),

    /// Departure station is not an integer
    #[error("bad departure station input")]
    BadDepartureStation(#[source] InvalidStationId),
}

/// A validated query: which trains to keep and how to order them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryRequest {
    /// Station the train must leave from.
    pub departure: StationId,

    /// Station the train must arrive at.
    pub arrival: StationId,

    /// Ordering of the results.
    pub criterion: Criterion,
}

impl QueryRequest {
    /// Create a request from already validated parts.
    pub fn new(departure: StationId, arrival: StationId, criterion: Criterion) -> Self {
        Self {
            departure,
            arrival,
            criterion,
        }
    }

    /// Validate raw user input.
    ///
    /// The criterion is checked first, then the arrival station, then the
    /// departure station; the first failure is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::{Criterion, StationId};
    /// use train_finder::query::{QueryRequest, RequestError};
    ///
    /// let request = QueryRequest::parse("10", "20", "price").unwrap();
    /// assert_eq!(request.departure, StationId::new(10));
    /// assert_eq!(request.criterion, Criterion::Price);
    ///
    /// let err = QueryRequest::parse("10", "Odesa", "price").unwrap_err();
    /// assert!(matches!(err, RequestError::BadArrivalStation(_)));
    /// ```
    pub fn parse(departure: &str, arrival: &str, criterion: &str) -> Result<Self, RequestError> {
        let criterion = criterion
            .parse::<Criterion>()
            .map_err(RequestError::UnsupportedCriterion)?;
        let arrival = StationId::parse(arrival).map_err(RequestError::BadArrivalStation)?;
        let departure = StationId::parse(departure).map_err(RequestError::BadDepartureStation)?;

        Ok(Self {
            departure,
            arrival,
            criterion,
        })
    }
}
