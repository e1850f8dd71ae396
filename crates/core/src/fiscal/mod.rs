//! Fiscal year calculations.
//!
//! - `year` - Fiscal year rule, classification and ranges
//! - `error` - Fiscal error types

pub mod error;
pub mod year;

#[cfg(test)]
mod props;

pub use error::FiscalError;
pub use year::{FiscalYear, YearDigits};
