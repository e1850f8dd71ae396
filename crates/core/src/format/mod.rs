//! PHP `date()` compatible formatting.
//!
//! Callers pick a named layout or supply their own pattern:
//!
//! ```
//! use daterange_core::format::DateFormat;
//!
//! assert_eq!(DateFormat::from("Y-m-d"), DateFormat::Date);
//! assert_eq!(DateFormat::from("d/m/Y").as_str(), "d/m/Y");
//! ```

mod pattern;
mod render;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub use pattern::{Pattern, Token};

const YEAR: &[Token] = &[Token::Year];
const YEAR_MONTH: &[Token] = &[Token::Year, Token::Literal('-'), Token::MonthPadded];
const DATE: &[Token] = &[
    Token::Year,
    Token::Literal('-'),
    Token::MonthPadded,
    Token::Literal('-'),
    Token::DayPadded,
];
const DATE_TIME: &[Token] = &[
    Token::Year,
    Token::Literal('-'),
    Token::MonthPadded,
    Token::Literal('-'),
    Token::DayPadded,
    Token::Literal(' '),
    Token::Hour24Padded,
    Token::Literal(':'),
    Token::Minute,
    Token::Literal(':'),
    Token::Second,
];
const ISO_8601: &[Token] = &[Token::Iso8601];
const RFC_2822: &[Token] = &[Token::Rfc2822];
const UNIX_TIMESTAMP: &[Token] = &[Token::UnixTimestamp];
const WEEKDAY: &[Token] = &[Token::Weekday];
const MONTH_DAY: &[Token] = &[Token::MonthPadded, Token::Literal('-'), Token::DayPadded];

/// How an instant is turned into a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFormat {
    /// `Y`, e.g. `2014`.
    Year,
    /// `Y-m`, e.g. `2014-08`.
    YearMonth,
    /// `Y-m-d`, e.g. `2014-08-05`.
    Date,
    /// `Y-m-d H:i:s`, e.g. `2014-08-05 00:00:00`.
    DateTime,
    /// `c`, e.g. `2014-08-05T00:00:00-04:00`.
    Iso8601,
    /// `r`, e.g. `Tue, 05 Aug 2014 00:00:00 -0400`.
    Rfc2822,
    /// `U`, seconds since the Unix epoch.
    UnixTimestamp,
    /// `w`, 0 (Sunday) to 6 (Saturday).
    Weekday,
    /// `m-d`, e.g. `08-05`.
    MonthDay,
    /// Any other `date()` pattern.
    Custom(Pattern),
}

impl DateFormat {
    /// The `date()` pattern string for this format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Year => "Y",
            Self::YearMonth => "Y-m",
            Self::Date => "Y-m-d",
            Self::DateTime => "Y-m-d H:i:s",
            Self::Iso8601 => "c",
            Self::Rfc2822 => "r",
            Self::UnixTimestamp => "U",
            Self::Weekday => "w",
            Self::MonthDay => "m-d",
            Self::Custom(pattern) => pattern.as_str(),
        }
    }

    fn tokens(&self) -> &[Token] {
        match self {
            Self::Year => YEAR,
            Self::YearMonth => YEAR_MONTH,
            Self::Date => DATE,
            Self::DateTime => DATE_TIME,
            Self::Iso8601 => ISO_8601,
            Self::Rfc2822 => RFC_2822,
            Self::UnixTimestamp => UNIX_TIMESTAMP,
            Self::Weekday => WEEKDAY,
            Self::MonthDay => MONTH_DAY,
            Self::Custom(pattern) => pattern.tokens(),
        }
    }

    /// Formats `dt` in its own zone.
    #[must_use]
    pub fn render(&self, dt: &DateTime<Tz>) -> String {
        render::render(self.tokens(), dt)
    }
}

impl From<&str> for DateFormat {
    fn from(value: &str) -> Self {
        match value {
            "Y" => Self::Year,
            "Y-m" => Self::YearMonth,
            "Y-m-d" => Self::Date,
            "Y-m-d H:i:s" => Self::DateTime,
            "c" => Self::Iso8601,
            "r" => Self::Rfc2822,
            "U" => Self::UnixTimestamp,
            "w" => Self::Weekday,
            "m-d" => Self::MonthDay,
            other => Self::Custom(Pattern::parse(other)),
        }
    }
}

impl From<String> for DateFormat {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for DateFormat {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&DateFormat> for DateFormat {
    fn from(value: &DateFormat) -> Self {
        value.clone()
    }
}

impl From<Pattern> for DateFormat {
    fn from(value: Pattern) -> Self {
        Self::from(value.as_str())
    }
}

impl From<DateFormat> for String {
    fn from(value: DateFormat) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
