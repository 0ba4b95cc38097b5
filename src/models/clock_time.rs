//! Wall-clock time of day at minute precision.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A time of day in the location's local wall-clock frame, `HH:MM`.
///
/// Schedules store times as zero-padded 24-hour strings and compare them as
/// strings. `ClockTime` orders by `(hour, minute)`, which is the same order
/// the zero-padded strings have, so comparisons behave identically while the
/// value is guaranteed well-formed.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::models::ClockTime;
///
/// let nine: ClockTime = "09:00".parse().unwrap();
/// let five_pm: ClockTime = "17:00".parse().unwrap();
/// assert!(nine < five_pm);
/// assert_eq!(nine.to_string(), "09:00");
/// assert!("9:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a time of day, rejecting hours above 23 or minutes above 59.
    pub fn new(hour: u8, minute: u8) -> EngineResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(EngineError::InvalidClockTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Takes the hour and minute of a timestamp. Seconds are dropped, so
    /// `17:00:59` becomes `17:00`.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
        }
    }

    /// The hour, 0-23.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The minute, 0-59.
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidClockTime {
            value: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
