//! Configured output defaults for date ranges.

use chrono_tz::Tz;
use daterange_shared::DisplayConfig;

use super::date_range::DateRange;
use super::error::RangeError;
use crate::format::DateFormat;

/// Return zone and label formats taken from the `display` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeDisplay {
    return_zone: Option<Tz>,
    day_format: DateFormat,
    month_format: DateFormat,
    year_format: DateFormat,
}

impl Default for RangeDisplay {
    fn default() -> Self {
        Self {
            return_zone: None,
            day_format: DateFormat::Date,
            month_format: DateFormat::YearMonth,
            year_format: DateFormat::Year,
        }
    }
}

impl RangeDisplay {
    /// Builds the defaults from the `display` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::UnknownZone`] if `return_zone` is not an IANA
    /// identifier.
    pub fn from_config(config: &DisplayConfig) -> Result<Self, RangeError> {
        let return_zone = config
            .return_zone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| RangeError::UnknownZone(name.to_string()))
            })
            .transpose()?;

        Ok(Self {
            return_zone,
            day_format: DateFormat::from(&config.day_format),
            month_format: DateFormat::from(&config.month_format),
            year_format: DateFormat::from(&config.year_format),
        })
    }

    /// Configured return zone, if any.
    #[must_use]
    pub const fn return_zone(&self) -> Option<Tz> {
        self.return_zone
    }

    /// Reports `range` in the configured zone; without one the range keeps
    /// its own.
    #[must_use]
    pub fn apply(&self, range: DateRange) -> DateRange {
        match self.return_zone {
            Some(zone) => range.with_return_zone(zone),
            None => range,
        }
    }

    /// [`DateRange::years`] with the configured format and zone.
    #[must_use]
    pub fn years(&self, range: &DateRange) -> Vec<String> {
        self.apply(*range).years(&self.year_format)
    }

    /// [`DateRange::months`] with the configured format and zone.
    #[must_use]
    pub fn months(&self, range: &DateRange) -> Vec<String> {
        self.apply(*range).months(&self.month_format)
    }

    /// [`DateRange::days`] with the configured format and zone.
    #[must_use]
    pub fn days(&self, range: &DateRange) -> Vec<String> {
        self.apply(*range).days(&self.day_format)
    }
}
