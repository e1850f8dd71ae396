//! Date ranges and the calendar views derived from them.
//!
//! This module implements:
//! - The `DateRange` value type and its zone handling
//! - Year, month and day enumeration
//! - Splitting by calendar month
//! - Elapsed-duration counts
//! - Nth-day and nth-weekday lookups
//! - Recurring month-day counting
//! - Configured display defaults

pub mod date_range;
pub mod display;
pub mod error;

#[cfg(test)]
mod props;

pub use date_range::DateRange;
pub use display::RangeDisplay;
pub use error::RangeError;
