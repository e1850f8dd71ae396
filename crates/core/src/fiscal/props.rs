//! Property-based tests for `FiscalYear`.
//!
//! - A January 1st start is the calendar year
//! - Every date lies in the fiscal year it is classified into
//! - Consecutive fiscal years meet without a gap

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use proptest::prelude::*;

use super::year::FiscalYear;

/// Strategy to generate instants between 1970 and 2100, with nanoseconds.
fn instant() -> impl Strategy<Value = DateTime<Tz>> {
    (0i64..47_000 * 86_400, 0u32..1_000_000_000).prop_map(|(offset, nanos)| {
        DateTime::from_timestamp(offset, nanos)
            .unwrap()
            .with_timezone(&chrono_tz::UTC)
    })
}

/// Strategy to generate valid fiscal year rules in a few zones.
fn fiscal_year() -> impl Strategy<Value = FiscalYear> {
    let zone = prop_oneof![
        Just(chrono_tz::UTC),
        Just(chrono_tz::America::New_York),
        Just(chrono_tz::Australia::Sydney),
        Just(chrono_tz::Asia::Kolkata),
    ];
    (1u32..=12, 1u32..=28, zone)
        .prop_map(|(month, day, zone)| FiscalYear::new(month, day).unwrap().with_zone(zone))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* date, a fiscal year starting January 1st is the calendar
    /// year of the date in the fiscal zone.
    #[test]
    fn prop_calendar_aligned_fiscal_year_is_identity(date in instant()) {
        let fiscal = FiscalYear::new(1, 1).unwrap();
        prop_assert_eq!(fiscal.fiscal_year(&date), date.year());
    }

    /// *For any* rule and date, the date lies in its own fiscal year and in
    /// neither neighbour.
    #[test]
    fn prop_date_in_own_fiscal_year(fiscal in fiscal_year(), date in instant()) {
        let year = fiscal.fiscal_year(&date);
        prop_assert!(fiscal.date_in_fy(&date, year));
        prop_assert!(!fiscal.date_in_fy(&date, year - 1));
        prop_assert!(!fiscal.date_in_fy(&date, year + 1));
    }

    /// *For any* rule, fiscal year N ends one second before N + 1 starts.
    #[test]
    fn prop_consecutive_years_are_contiguous(fiscal in fiscal_year(), year in 1971i32..2100) {
        let this = fiscal.year_to_fy_date_range(year).unwrap();
        let next = fiscal.year_to_fy_date_range(year + 1).unwrap();
        prop_assert_eq!((next.start_utc() - this.end_utc()).num_seconds(), 1);
    }
}
