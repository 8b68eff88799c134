//! Ranking criteria for query results.

use std::fmt;
use std::str::FromStr;

/// Error returned for a criterion name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria")]
pub struct InvalidCriterion {
    input: String,
}

impl InvalidCriterion {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// The key a query result is ordered by.
///
/// # Examples
///
/// ```
/// use train_finder::domain::Criterion;
///
/// let criterion: Criterion = "arrival-time".parse().unwrap();
/// assert_eq!(criterion, Criterion::ArrivalTime);
/// assert_eq!(criterion.as_str(), "arrival-time");
///
/// assert!("duration".parse::<Criterion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Cheapest first.
    Price,
    /// Earliest arrival first.
    ArrivalTime,
    /// Earliest departure first.
    DepartureTime,
}

impl Criterion {
    /// Every supported criterion, in the order they are listed to users.
    pub const ALL: [Criterion; 3] = [
        Criterion::Price,
        Criterion::ArrivalTime,
        Criterion::DepartureTime,
    ];

    /// The name used on the command line and in query strings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Criterion::Price => "price",
            Criterion::ArrivalTime => "arrival-time",
            Criterion::DepartureTime => "departure-time",
        }
    }
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidCriterion {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
