//! Fiscal year error types.

use thiserror::Error;

/// Errors that can occur while defining or evaluating fiscal years.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiscalError {
    // ========== Construction Errors ==========
    /// The start month/day is not a day of the non-leap reference year.
    #[error("Invalid fiscal year start: month {month}, day {day}")]
    InvalidStartDate {
        /// Requested start month.
        month: u32,
        /// Requested start day.
        day: u32,
    },

    /// The configured zone is not an IANA identifier.
    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    // ========== Evaluation Errors ==========
    /// The fiscal year cannot be represented as a calendar range.
    #[error("Fiscal year {0} is out of range")]
    YearOutOfRange(i32),
}

impl FiscalError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStartDate { .. } => "INVALID_FISCAL_START",
            Self::UnknownZone(_) => "UNKNOWN_ZONE",
            Self::YearOutOfRange(_) => "FISCAL_YEAR_OUT_OF_RANGE",
        }
    }
}
