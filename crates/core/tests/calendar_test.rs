//! Integration tests for the public calendar API.
//!
//! Drives `DateRange` and `FiscalYear` the way a caller would: values built
//! from configuration loaded through the environment, with tracing enabled.

use chrono::{NaiveDate, TimeZone, Weekday};
use chrono_tz::America::{New_York, Vancouver};
use chrono_tz::Asia::Tokyo;
use chrono_tz::UTC;
use daterange_core::{
    DateFormat, DateRange, FiscalYear, MonthDay, RangeDisplay, RangeError, YearDigits,
};
use daterange_shared::CalendarConfig;
use daterange_shared::telemetry::{DEFAULT_FILTER, init_tracing};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// DateRange scenarios
// ============================================================================

#[test]
fn test_mixed_zone_range_reported_in_new_york() {
    init_tracing(DEFAULT_FILTER).unwrap();

    let range = DateRange::new(
        Tokyo.with_ymd_and_hms(2014, 8, 5, 13, 0, 0).unwrap(),
        Vancouver.with_ymd_and_hms(2014, 8, 27, 21, 0, 0).unwrap(),
    )
    .with_return_zone(New_York);

    assert_eq!(range.format_start(DateFormat::DateTime), "2014-08-05 00:00:00");
    assert_eq!(range.format_end(DateFormat::DateTime), "2014-08-28 00:00:00");
    assert_eq!(range.years(DateFormat::Year), vec!["2014"]);
    assert_eq!(range.day_of_range(5), Ok(ymd(2014, 8, 9)));
    assert_eq!(range.day_of_range(-5), Ok(ymd(2014, 8, 24)));
    assert_eq!(range.weekday_of_range(1, Weekday::Fri), Ok(ymd(2014, 8, 8)));
    assert_eq!(
        range.day_of_range(100),
        Err(RangeError::DayOutsideRange { day: 100 })
    );
}

#[test]
fn test_recurring_dates_over_three_years() {
    let range = DateRange::new(
        UTC.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2016, 12, 1, 0, 0, 0).unwrap(),
    );
    assert_eq!(range.number_of_dates_occurring_str(["01-12", "06-16", "12-21"]), Ok(8));

    let typed: Vec<MonthDay> = ["01-12", "06-16", "12-21"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(range.number_of_dates_occurring(&typed), 8);
}

#[test]
fn test_split_then_enumerate() {
    let range = DateRange::new(
        New_York.with_ymd_and_hms(2014, 1, 15, 9, 0, 0).unwrap(),
        New_York.with_ymd_and_hms(2014, 3, 10, 17, 0, 0).unwrap(),
    );
    let pieces = range.split_by_month();
    let lengths: Vec<usize> = pieces.iter().map(|p| p.days(DateFormat::Date).len()).collect();
    assert_eq!(lengths, vec![17, 28, 10]);
    assert_eq!(
        pieces[1].to_string(),
        "2014-02-01T00:00:00-05:00/2014-02-28T23:59:59-05:00"
    );
}

// ============================================================================
// Configuration driven
// ============================================================================

#[test]
fn test_fiscal_year_from_environment() {
    temp_env::with_vars(
        [
            ("DATERANGE__FISCAL__START_MONTH", Some("5")),
            ("DATERANGE__FISCAL__START_DAY", Some("5")),
            ("DATERANGE__FISCAL__ZONE", Some("UTC")),
            ("DATERANGE__DISPLAY__RETURN_ZONE", Some("America/New_York")),
            ("DATERANGE__DISPLAY__MONTH_FORMAT", Some("M Y")),
        ],
        || {
            let config = CalendarConfig::load().unwrap();
            let fiscal = FiscalYear::from_config(&config.fiscal).unwrap();
            let display = RangeDisplay::from_config(&config.display).unwrap();

            let date = UTC.with_ymd_and_hms(2015, 6, 13, 16, 30, 22).unwrap();
            assert_eq!(fiscal.fiscal_year(&date), 2016);
            assert_eq!(
                fiscal.date_to_fy_string(&date, YearDigits::Two, Some("FY")),
                "FY16"
            );

            let range = fiscal.date_to_fy_date_range(&date).unwrap();
            assert_eq!(range.format_start(DateFormat::DateTime), "2015-05-05 00:00:00");
            assert_eq!(range.format_end(DateFormat::DateTime), "2016-05-04 23:59:59");

            // Midnight UTC on May 5th is still May 4th in New York.
            let months = display.months(&range);
            assert_eq!(months.first().map(String::as_str), Some("May 2015"));
            assert_eq!(months.len(), 13);
        },
    );
}
