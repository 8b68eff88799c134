//! Station identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a station identifier is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: must be an integer")]
pub struct InvalidStationId {
    input: String,
}

impl InvalidStationId {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Numeric identifier of a station in the timetable.
///
/// Any signed 64-bit integer is accepted; the timetable decides which
/// identifiers exist.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let id = StationId::parse("1902").unwrap();
/// assert_eq!(id.get(), 1902);
///
/// assert!(StationId::parse("Kyiv").is_err());
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(i64);

impl StationId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a station identifier from user input.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        s.parse::<i64>().map(Self).map_err(|_| InvalidStationId {
            input: s.to_string(),
        })
    }

    /// Returns the raw identifier.
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any i64 survives display then parse
        #[test]
        fn roundtrip(n in any::<i64>()) {
            let id = StationId::new(n);
            prop_assert_eq!(StationId::parse(&id.to_string()).unwrap(), id);
        }

        /// Strings containing a letter are always rejected
        #[test]
        fn letters_rejected(s in "[0-9]{0,4}[a-zA-Z][0-9a-zA-Z]{0,4}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
