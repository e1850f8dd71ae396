//! Shared types, errors, and configuration for DateRange.
//!
//! This crate provides the pieces used by every other crate:
//! - `MonthDay`, a parsed recurring "MM-DD" calendar day
//! - The shared error type for configuration and tracing setup
//! - Configuration management
//! - Tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{CalendarConfig, DisplayConfig, FiscalConfig};
pub use error::{SharedError, SharedResult};
pub use types::{MonthDay, MonthDayError};
