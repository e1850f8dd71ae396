//! Calendar arithmetic over time zone aware date ranges.
//!
//! This crate contains pure calendar logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `range` - The `DateRange` value type: enumerations, splits, durations and lookups
//! - `fiscal` - Fiscal year classification and fiscal year ranges
//! - `format` - PHP `date()` compatible formatting
//! - `zone` - Wall-clock to instant conversion and month arithmetic
//!
//! ```
//! use chrono::TimeZone;
//! use chrono_tz::UTC;
//! use daterange_core::{DateRange, FiscalYear};
//!
//! let fy = FiscalYear::new(5, 5).unwrap();
//! let date = UTC.with_ymd_and_hms(2015, 6, 13, 16, 30, 22).unwrap();
//! assert_eq!(fy.fiscal_year(&date), 2016);
//!
//! let range: DateRange = fy.date_to_fy_date_range(&date).unwrap();
//! assert_eq!(range.format_start("Y-m-d H:i:s"), "2015-05-05 00:00:00");
//! assert_eq!(range.format_end("Y-m-d H:i:s"), "2016-05-04 23:59:59");
//! ```

pub mod fiscal;
pub mod format;
pub mod range;
pub mod zone;

pub use daterange_shared::{MonthDay, MonthDayError};
pub use fiscal::{FiscalError, FiscalYear, YearDigits};
pub use format::DateFormat;
pub use range::{DateRange, RangeDisplay, RangeError};
