//! Date range error types.

use chrono::Weekday;
use daterange_shared::MonthDayError;
use thiserror::Error;

/// Errors that can occur during date range lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    // ========== Boundary Errors ==========
    /// The requested day is not inside the range.
    #[error("Requested day {day} falls outside of DateRange")]
    DayOutsideRange {
        /// 1-based index from the start, or negative index from the end.
        day: i64,
    },

    /// The requested weekday is not inside the range.
    #[error("Requested {weekday} of week {week} falls outside of DateRange")]
    WeekdayOutsideRange {
        /// 1-based week from the start, or negative week from the end.
        week: i64,
        /// Requested weekday.
        weekday: Weekday,
    },

    /// Week 0 names no week.
    #[error("Week index must be non-zero")]
    InvalidWeekIndex,

    // ========== Argument Errors ==========
    /// An entry of a month-day list could not be parsed.
    #[error("Invalid month-day entry: {0}")]
    InvalidMonthDay(#[from] MonthDayError),

    // ========== Configuration Errors ==========
    /// A configured zone is not an IANA identifier.
    #[error("Unknown time zone: {0}")]
    UnknownZone(String),
}

impl RangeError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DayOutsideRange { .. } => "DAY_OUTSIDE_RANGE",
            Self::WeekdayOutsideRange { .. } => "WEEKDAY_OUTSIDE_RANGE",
            Self::InvalidWeekIndex => "INVALID_WEEK_INDEX",
            Self::InvalidMonthDay(_) => "INVALID_MONTH_DAY",
            Self::UnknownZone(_) => "UNKNOWN_ZONE",
        }
    }

    /// Returns true if the lookup fell off either end of the range.
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        matches!(
            self,
            Self::DayOutsideRange { .. } | Self::WeekdayOutsideRange { .. }
        )
    }
}
