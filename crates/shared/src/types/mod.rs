//! Common value types used across the workspace.

pub mod month_day;

pub use month_day::{MonthDay, MonthDayError};
