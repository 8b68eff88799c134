//! Time-of-day handling for timetable data.
//!
//! Timetables give arrival and departure times as "HH:MM:SS" strings with no
//! date attached. Two times are ordered by their clock value alone.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Returns the reason the time was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A wall-clock time with no date component.
///
/// Field order matters: the derived ordering compares hour, then minute,
/// then second.
///
/// # Examples
///
/// ```
/// use train_finder::domain::TimeOfDay;
///
/// let early = TimeOfDay::parse_hhmmss("08:30:00").unwrap();
/// let late = TimeOfDay::parse_hhmmss("21:05:59").unwrap();
/// assert!(early < late);
/// assert_eq!(late.to_string(), "21:05:59");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Create a time from its components, or `None` if any is out of range.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Parse a time from "HH:MM:SS" format.
    ///
    /// Every component must be exactly two ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmmss("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmmss("23:59:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmmss("9:00:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("09:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("09-00-00").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmmss(s)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour, self.minute, self.second
        )
    }
}

/// Parse two ASCII digit bytes into a u8.
fn parse_two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    u8::try_from(d1 * 10 + d2).ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range time survives display then parse
        #[test]
        fn display_parse_roundtrip(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
            let time = TimeOfDay::from_hms(h, m, s).unwrap();
            let parsed = TimeOfDay::parse_hhmmss(&time.to_string()).unwrap();
            prop_assert_eq!(parsed, time);
        }

        /// Ordering agrees with seconds since midnight
        #[test]
        fn ordering_matches_seconds(
            a in (0u8..24, 0u8..60, 0u8..60),
            b in (0u8..24, 0u8..60, 0u8..60),
        ) {
            let ta = TimeOfDay::from_hms(a.0, a.1, a.2).unwrap();
            let tb = TimeOfDay::from_hms(b.0, b.1, b.2).unwrap();
            prop_assert_eq!(
                ta.cmp(&tb),
                ta.seconds_since_midnight().cmp(&tb.seconds_since_midnight())
            );
        }

        /// Out-of-range hours are always rejected
        #[test]
        fn hour_out_of_range_rejected(h in 24u8..100, m in 0u8..60, s in 0u8..60) {
            let input = format!("{h:02}:{m:02}:{s:02}");
            prop_assert!(TimeOfDay::parse_hhmmss(&input).is_err());
        }

        /// Arbitrary strings never panic the parser
        #[test]
        fn never_panics(s in ".{0,12}") {
            let _ = TimeOfDay::parse_hhmmss(&s);
        }
    }
}
