//! The `DateRange` value type.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use daterange_shared::{MonthDay, MonthDayError};
use serde::{Deserialize, Serialize};

use super::error::RangeError;
use crate::format::DateFormat;
use crate::zone::{first_day_of_month, last_day_of_month, local_end_of_day, local_midnight};

/// An inclusive span between two instants.
///
/// Both ends are stored in UTC. Every reader projects them into the return
/// zone, which defaults to the zone of the `start` passed to [`DateRange::new`].
/// The zones of the inputs are not kept beyond that default.
///
/// `start <= end` is not enforced. With `start > end` the enumerations are
/// empty, durations are negative and every lookup fails.
///
/// `DateRange` is a `Copy` value; the `with_*` methods return an updated copy.
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::{America::New_York, Asia::Tokyo};
/// use daterange_core::DateRange;
///
/// let range = DateRange::new(
///     Tokyo.with_ymd_and_hms(2014, 8, 5, 13, 0, 0).unwrap(),
///     Tokyo.with_ymd_and_hms(2014, 8, 28, 13, 0, 0).unwrap(),
/// )
/// .with_return_zone(New_York);
///
/// assert_eq!(range.format_start("Y-m-d H:i:s"), "2014-08-05 00:00:00");
/// assert_eq!(range.days("Y-m-d").len(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    return_zone: Tz,
}

impl DateRange {
    /// Creates a range reported in `zone`.
    #[must_use]
    pub fn new_in(start: DateTime<Tz>, end: DateTime<Tz>, zone: Tz) -> Self {
        Self::new(start, end).with_return_zone(zone)
    }

    /// Creates a range; results are reported in `start`'s zone. Use
    /// [`DateRange::new_in`] to pick the zone up front.
    #[must_use]
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        let range = Self {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
            return_zone: start.timezone(),
        };
        tracing::trace!(
            start = %range.start,
            end = %range.end,
            zone = range.return_zone.name(),
            "DateRange created"
        );
        range
    }

    /// Replaces the start instant, keeping the return zone.
    #[must_use]
    pub fn with_start<Z: TimeZone>(self, start: DateTime<Z>) -> Self {
        Self {
            start: start.with_timezone(&Utc),
            ..self
        }
    }

    /// Replaces the end instant, keeping the return zone.
    #[must_use]
    pub fn with_end<Z: TimeZone>(self, end: DateTime<Z>) -> Self {
        Self {
            end: end.with_timezone(&Utc),
            ..self
        }
    }

    /// Replaces the zone results are reported in.
    #[must_use]
    pub fn with_return_zone(self, zone: Tz) -> Self {
        Self {
            return_zone: zone,
            ..self
        }
    }

    /// Zone results are reported in.
    #[must_use]
    pub const fn return_zone(&self) -> Tz {
        self.return_zone
    }

    /// Canonical start instant.
    #[must_use]
    pub const fn start_utc(&self) -> DateTime<Utc> {
        self.start
    }

    /// Canonical end instant.
    #[must_use]
    pub const fn end_utc(&self) -> DateTime<Utc> {
        self.end
    }

    /// Start in the return zone.
    #[must_use]
    pub fn start(&self) -> DateTime<Tz> {
        self.start.with_timezone(&self.return_zone)
    }

    /// End in the return zone.
    #[must_use]
    pub fn end(&self) -> DateTime<Tz> {
        self.end.with_timezone(&self.return_zone)
    }

    /// Start in the return zone, formatted.
    #[must_use]
    pub fn format_start(&self, format: impl Into<DateFormat>) -> String {
        format.into().render(&self.start())
    }

    /// End in the return zone, formatted.
    #[must_use]
    pub fn format_end(&self, format: impl Into<DateFormat>) -> String {
        format.into().render(&self.end())
    }

    fn start_date(&self) -> NaiveDate {
        self.start().date_naive()
    }

    fn end_date(&self) -> NaiveDate {
        self.end().date_naive()
    }

    /// Returns true if `start` is after `end`.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Calendar days touched by the range, in the return zone.
    fn local_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let count = usize::try_from(self.day_count()).unwrap_or(usize::MAX);
        self.start_date().iter_days().take(count)
    }

    fn label(&self, date: NaiveDate, format: &DateFormat) -> String {
        format.render(&local_midnight(self.return_zone, date))
    }

    /// One label per calendar year touched, rendered at January 1st 00:00.
    #[must_use]
    pub fn years(&self, format: impl Into<DateFormat>) -> Vec<String> {
        if self.is_reversed() {
            return Vec::new();
        }
        let format = format.into();
        (self.start().year()..=self.end().year())
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .map(|first| self.label(first, &format))
            .collect()
    }

    /// One label per calendar month touched, rendered at the 1st 00:00.
    #[must_use]
    pub fn months(&self, format: impl Into<DateFormat>) -> Vec<String> {
        let format = format.into();
        self.month_starts()
            .map(|first| self.label(first, &format))
            .collect()
    }

    /// One label per calendar day touched, rendered at 00:00.
    #[must_use]
    pub fn days(&self, format: impl Into<DateFormat>) -> Vec<String> {
        let format = format.into();
        self.local_days()
            .map(|day| self.label(day, &format))
            .collect()
    }

    fn month_starts(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = first_day_of_month(self.end_date());
        let first = (!self.is_reversed()).then(|| first_day_of_month(self.start_date()));
        std::iter::successors(first, |month| month.checked_add_months(Months::new(1)))
            .take_while(move |month| *month <= last)
    }

    /// Splits the range into one piece per calendar month.
    ///
    /// The first piece keeps the original start and the last piece keeps the
    /// original end. Month ends are 23:59:59 on the last day; month starts are
    /// 00:00 on the 1st. Boundaries are built in the return zone, so every
    /// piece reports in the same zone as `self`.
    ///
    /// A range inside a single month (or with `start > end`) comes back as is.
    #[must_use]
    pub fn split_by_month(&self) -> Vec<DateRange> {
        let months: Vec<NaiveDate> = self.month_starts().collect();
        let Some((first, rest)) = months.split_first() else {
            return vec![*self];
        };
        let Some((last, interior)) = rest.split_last() else {
            return vec![*self];
        };

        let zone = self.return_zone;
        let mut pieces = Vec::with_capacity(months.len());
        pieces.push(DateRange::new(
            self.start(),
            local_end_of_day(zone, last_day_of_month(*first)),
        ));
        pieces.extend(interior.iter().map(|month| {
            DateRange::new(
                local_midnight(zone, *month),
                local_end_of_day(zone, last_day_of_month(*month)),
            )
        }));
        pieces.push(DateRange::new(local_midnight(zone, *last), self.end()));

        tracing::debug!(pieces = pieces.len(), "DateRange split by month");
        pieces
    }

    fn elapsed_seconds(&self) -> i64 {
        self.end.timestamp() - self.start.timestamp()
    }

    /// Whole seconds from start to end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_seconds(&self) -> f64 {
        self.elapsed_seconds() as f64
    }

    /// Complete minutes from start to end, floored.
    #[must_use]
    pub fn as_minutes(&self) -> i64 {
        self.elapsed_seconds().div_euclid(60)
    }

    /// Complete hours from start to end, floored.
    #[must_use]
    pub fn as_hours(&self) -> i64 {
        self.elapsed_seconds().div_euclid(3_600)
    }

    /// Complete days from start to end, floored.
    #[must_use]
    pub fn as_days(&self) -> i64 {
        self.elapsed_seconds().div_euclid(86_400)
    }

    /// Number of calendar days touched, in the return zone. Zero when reversed.
    #[must_use]
    pub fn day_count(&self) -> u64 {
        if self.is_reversed() {
            return 0;
        }
        let days = (self.end_date() - self.start_date()).num_days();
        u64::try_from(days + 1).unwrap_or(0)
    }

    /// Returns true if `instant` lies within `[start, end]`.
    #[must_use]
    pub fn contains<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        let instant = instant.with_timezone(&Utc);
        self.start <= instant && instant <= self.end
    }

    /// Returns true if `date` is one of the calendar days touched.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        !self.is_reversed() && self.start_date() <= date && date <= self.end_date()
    }

    fn within_days(&self, date: Option<NaiveDate>) -> Option<NaiveDate> {
        date.filter(|date| self.contains_date(*date))
    }

    /// The `day`-th calendar day of the range.
    ///
    /// Positive values count from the start (`1` is the start's date),
    /// negative values count back from the end (`-1` is the end's date).
    /// `0` names no day and is rejected like any other out-of-range index.
    ///
    /// ```
    /// # use chrono::{NaiveDate, TimeZone};
    /// # use chrono_tz::UTC;
    /// # use daterange_core::DateRange;
    /// let range = DateRange::new(
    ///     UTC.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap(),
    ///     UTC.with_ymd_and_hms(2015, 1, 31, 0, 0, 0).unwrap(),
    /// );
    /// assert_eq!(range.day_of_range(10).unwrap(), NaiveDate::from_ymd_opt(2015, 1, 10).unwrap());
    /// assert_eq!(range.day_of_range(-5).unwrap(), NaiveDate::from_ymd_opt(2015, 1, 27).unwrap());
    /// ```
    pub fn day_of_range(&self, day: i64) -> Result<NaiveDate, RangeError> {
        let offset = Days::new(day.unsigned_abs().saturating_sub(1));
        let target = match day.cmp(&0) {
            Ordering::Greater => self.start_date().checked_add_days(offset),
            Ordering::Less => self.end_date().checked_sub_days(offset),
            Ordering::Equal => None,
        };

        self.within_days(target).ok_or_else(|| {
            tracing::debug!(day, "Requested day falls outside of DateRange");
            RangeError::DayOutsideRange { day }
        })
    }

    /// The `weekday` of the `week`-th week of the range.
    ///
    /// Positive weeks count from the start: week 1 holds the first `weekday`
    /// on or after the start's date. Negative weeks count back from the end:
    /// week -1 holds the last `weekday` on or before the end's date.
    pub fn weekday_of_range(&self, week: i64, weekday: Weekday) -> Result<NaiveDate, RangeError> {
        if week == 0 {
            return Err(RangeError::InvalidWeekIndex);
        }

        let whole_weeks = (week.unsigned_abs() - 1).checked_mul(7).map(Days::new);
        let target = weekday.num_days_from_sunday();
        let date = if week > 0 {
            let from = self.start_date();
            let ahead = (7 + target - from.weekday().num_days_from_sunday()) % 7;
            whole_weeks.and_then(|weeks| {
                from.checked_add_days(Days::new(u64::from(ahead)))?
                    .checked_add_days(weeks)
            })
        } else {
            let from = self.end_date();
            let behind = (7 + from.weekday().num_days_from_sunday() - target) % 7;
            whole_weeks.and_then(|weeks| {
                from.checked_sub_days(Days::new(u64::from(behind)))?
                    .checked_sub_days(weeks)
            })
        };

        self.within_days(date).ok_or_else(|| {
            tracing::debug!(week, %weekday, "Requested weekday falls outside of DateRange");
            RangeError::WeekdayOutsideRange { week, weekday }
        })
    }

    /// Counts the calendar days in the range whose month and day appear in
    /// `dates`. Repeats in `dates` count once; a month-day recurring in
    /// several years counts once per year.
    #[must_use]
    pub fn number_of_dates_occurring(&self, dates: &[MonthDay]) -> usize {
        let wanted: HashSet<(u32, u32)> = dates.iter().map(|md| (md.month(), md.day())).collect();
        if wanted.is_empty() {
            return 0;
        }
        self.local_days()
            .filter(|day| wanted.contains(&(day.month(), day.day())))
            .count()
    }

    /// Like [`number_of_dates_occurring`](Self::number_of_dates_occurring) for
    /// raw `"MM-DD"` strings. Every entry is parsed before any counting.
    ///
    /// Entries that are not two digits, a dash and two digits are rejected.
    /// Well-formed entries naming no calendar day (`"02-30"`) never match.
    pub fn number_of_dates_occurring_str<I, S>(&self, dates: I) -> Result<usize, RangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for entry in dates {
            match entry.as_ref().parse::<MonthDay>() {
                Ok(month_day) => parsed.push(month_day),
                Err(MonthDayError::OutOfRange(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(self.number_of_dates_occurring(&parsed))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}",
            DateFormat::Iso8601.render(&self.start()),
            DateFormat::Iso8601.render(&self.end())
        )
    }
}
