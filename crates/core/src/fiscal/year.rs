//! Fiscal year definition and lookups.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, SubsecRound, TimeZone};
use chrono_tz::Tz;
use daterange_shared::FiscalConfig;
use serde::{Deserialize, Serialize};

use super::error::FiscalError;
use crate::range::DateRange;
use crate::zone::{local_end_of_day, local_midnight};

/// Non-leap year the start/end month-days are validated against.
const REFERENCE_YEAR: i32 = 2001;

/// How many digits of the fiscal year [`FiscalYear::date_to_fy_string`] prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearDigits {
    /// `2015`
    #[default]
    Four,
    /// `15`
    Two,
}

/// A fiscal year rule that applies to every year.
///
/// A fiscal year is named after the calendar year it ends in: with a start
/// of May 5th, fiscal year 2016 runs from 2015-05-05 00:00:00 to
/// 2016-05-04 23:59:59. The end is always the day before the start,
/// derived once against a non-leap year, so a March 1st start ends on
/// February 28th and a leap day opens the next fiscal year.
///
/// Boundaries are wall-clock times in [`FiscalYear::zone`] (UTC unless set
/// with [`FiscalYear::with_zone`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalYear {
    start_month: u32,
    start_day: u32,
    end_month: u32,
    end_day: u32,
    zone: Tz,
}

impl FiscalYear {
    /// Creates a fiscal year starting on `start_month`/`start_day`.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::InvalidStartDate`] if the pair is not a day of
    /// a non-leap year (so `2/29` is rejected).
    pub fn new(start_month: u32, start_day: u32) -> Result<Self, FiscalError> {
        let invalid = || FiscalError::InvalidStartDate {
            month: start_month,
            day: start_day,
        };
        let start = NaiveDate::from_ymd_opt(REFERENCE_YEAR, start_month, start_day)
            .ok_or_else(invalid)?;
        let end = start.pred_opt().ok_or_else(invalid)?;

        tracing::debug!(
            start_month,
            start_day,
            end_month = end.month(),
            end_day = end.day(),
            "Fiscal year defined"
        );

        Ok(Self {
            start_month,
            start_day,
            end_month: end.month(),
            end_day: end.day(),
            zone: chrono_tz::UTC,
        })
    }

    /// Builds a fiscal year from the `fiscal` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::UnknownZone`] for a zone chrono-tz does not
    /// know, or [`FiscalError::InvalidStartDate`] as [`FiscalYear::new`].
    pub fn from_config(config: &FiscalConfig) -> Result<Self, FiscalError> {
        let zone: Tz = config
            .zone
            .parse()
            .map_err(|_| FiscalError::UnknownZone(config.zone.clone()))?;
        Ok(Self::new(config.start_month, config.start_day)?.with_zone(zone))
    }

    /// Evaluates boundaries in `zone` instead.
    #[must_use]
    pub fn with_zone(self, zone: Tz) -> Self {
        Self { zone, ..self }
    }

    /// Month the fiscal year starts in.
    #[must_use]
    pub const fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Day of month the fiscal year starts on.
    #[must_use]
    pub const fn start_day(&self) -> u32 {
        self.start_day
    }

    /// Month the fiscal year ends in.
    #[must_use]
    pub const fn end_month(&self) -> u32 {
        self.end_month
    }

    /// Day of month the fiscal year ends on.
    #[must_use]
    pub const fn end_day(&self) -> u32 {
        self.end_day
    }

    /// Zone boundaries are evaluated in.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// The fiscal year `date` belongs to: its calendar year if it falls on
    /// or before that year's end day, otherwise the next one.
    #[must_use]
    pub fn fiscal_year<Z: TimeZone>(&self, date: &DateTime<Z>) -> i32 {
        let local = date.with_timezone(&self.zone).date_naive();
        let year = local.year();
        if (local.month(), local.day()) <= (self.end_month, self.end_day) {
            year
        } else {
            year + 1
        }
    }

    /// The fiscal year of `date` as text, e.g. `"2016"`, `"16"` or `"FY16"`.
    #[must_use]
    pub fn date_to_fy_string<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
        digits: YearDigits,
        prefix: Option<&str>,
    ) -> String {
        let year = self.fiscal_year(date);
        let prefix = prefix.unwrap_or_default();
        match digits {
            YearDigits::Four => format!("{prefix}{year}"),
            YearDigits::Two => format!("{prefix}{:02}", year.rem_euclid(100)),
        }
    }

    /// The full fiscal year containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::YearOutOfRange`] at the edges of the calendar.
    pub fn date_to_fy_date_range<Z: TimeZone>(
        &self,
        date: &DateTime<Z>,
    ) -> Result<DateRange, FiscalError> {
        self.year_to_fy_date_range(self.fiscal_year(date))
    }

    /// Fiscal year `fiscal_year` as a range from the start day at 00:00:00
    /// to the end day at 23:59:59, reported in [`FiscalYear::zone`].
    ///
    /// ```
    /// use chrono::TimeZone;
    /// use chrono_tz::UTC;
    /// use daterange_core::{DateRange, FiscalYear};
    ///
    /// let fy = FiscalYear::new(5, 5).unwrap();
    /// assert_eq!(
    ///     fy.year_to_fy_date_range(2016).unwrap(),
    ///     DateRange::new(
    ///         UTC.with_ymd_and_hms(2015, 5, 5, 0, 0, 0).unwrap(),
    ///         UTC.with_ymd_and_hms(2016, 5, 4, 23, 59, 59).unwrap(),
    ///     )
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::YearOutOfRange`] if the year cannot be
    /// represented.
    pub fn year_to_fy_date_range(&self, fiscal_year: i32) -> Result<DateRange, FiscalError> {
        let (start, end) = self
            .bounds(fiscal_year)
            .ok_or(FiscalError::YearOutOfRange(fiscal_year))?;
        Ok(DateRange::new(
            local_midnight(self.zone, start),
            local_end_of_day(self.zone, end),
        ))
    }

    /// First and last calendar day of `fiscal_year`. Keeps a day of margin
    /// on both sides so zone offsets stay representable.
    fn bounds(&self, fiscal_year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let end = NaiveDate::from_ymd_opt(fiscal_year, self.end_month, self.end_day)?;
        let start = end.checked_sub_months(Months::new(12))?.succ_opt()?;
        start.checked_sub_days(Days::new(1))?;
        end.checked_add_days(Days::new(1))?;
        Some((start, end))
    }

    /// Returns true if `date` lies within fiscal year `fiscal_year`.
    ///
    /// Compared at whole seconds, so the fraction of a second after the
    /// 23:59:59 boundary still belongs to the year.
    #[must_use]
    pub fn date_in_fy<Z: TimeZone>(&self, date: &DateTime<Z>, fiscal_year: i32) -> bool {
        let date = date.clone().trunc_subsecs(0);
        self.year_to_fy_date_range(fiscal_year)
            .is_ok_and(|range| range.contains(&date))
    }

    /// Fiscal year `fiscal_year` split into its calendar-month periods.
    ///
    /// A fiscal year starting mid-month yields 13 periods, the first and
    /// last being partial months.
    ///
    /// # Errors
    ///
    /// Returns [`FiscalError::YearOutOfRange`] as
    /// [`FiscalYear::year_to_fy_date_range`].
    pub fn fiscal_periods(&self, fiscal_year: i32) -> Result<Vec<DateRange>, FiscalError> {
        Ok(self.year_to_fy_date_range(fiscal_year)?.split_by_month())
    }
}

impl Default for FiscalYear {
    /// The calendar year, in UTC.
    fn default() -> Self {
        Self {
            start_month: 1,
            start_day: 1,
            end_month: 12,
            end_day: 31,
            zone: chrono_tz::UTC,
        }
    }
}
