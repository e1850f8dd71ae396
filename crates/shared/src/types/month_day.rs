//! Recurring calendar day ("MM-DD") without a year.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days per month in a leap year, so `02-29` is accepted.
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Errors produced when parsing a `MonthDay`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthDayError {
    /// Input is not exactly two digits, a dash, two digits.
    #[error("'{0}' does not match 'mm-dd' format")]
    Format(String),

    /// Digits are well-formed but name no calendar day.
    #[error("'{0}' is not a calendar day")]
    OutOfRange(String),
}

/// A month and day that recur every year, e.g. `12-25`.
///
/// Ordered by month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, checking it against a leap-year calendar.
    pub fn new(month: u32, day: u32) -> Result<Self, MonthDayError> {
        let valid = (1..=12).contains(&month)
            && day >= 1
            && MAX_DAYS
                .get(month as usize - 1)
                .is_some_and(|&max| day <= max);
        if valid {
            Ok(Self { month, day })
        } else {
            Err(MonthDayError::OutOfRange(format!("{month:02}-{day:02}")))
        }
    }

    /// Month, 1-based.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-based.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl std::str::FromStr for MonthDay {
    type Err = MonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b'-'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(MonthDayError::Format(s.to_string()));
        }

        let digit = |i: usize| u32::from(bytes[i] - b'0');
        Self::new(digit(0) * 10 + digit(1), digit(3) * 10 + digit(4))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = MonthDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}
