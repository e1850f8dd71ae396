//! Property-based tests for `DateRange`.
//!
//! - Enumerations agree with each other and with `day_count`
//! - Month splits tile the range without gaps or overlaps
//! - Day and weekday lookups stay inside the range

use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;
use proptest::prelude::*;

use super::date_range::DateRange;
use crate::format::DateFormat;

/// 2000-01-01T00:00:00Z
const EPOCH_2000: i64 = 946_684_800;

/// Strategy over a handful of zones with and without DST.
fn zone() -> impl Strategy<Value = Tz> {
    prop_oneof![
        Just(chrono_tz::UTC),
        Just(chrono_tz::America::New_York),
        Just(chrono_tz::America::Vancouver),
        Just(chrono_tz::Asia::Tokyo),
        Just(chrono_tz::Europe::Paris),
    ]
}

/// Strategy to generate weekdays.
fn weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
}

/// Strategy to generate forward ranges of up to ~4 years, starting between
/// 2000 and 2030, at whole seconds.
fn forward_range() -> impl Strategy<Value = DateRange> {
    (0i64..11_000, 0i64..86_400, 0i64..1_500 * 86_400, zone()).prop_map(
        |(days, secs, length, zone)| {
            let start = EPOCH_2000 + days * 86_400 + secs;
            let at = |ts: i64| DateTime::from_timestamp(ts, 0).unwrap().with_timezone(&zone);
            DateRange::new(at(start), at(start + length))
        },
    )
}

fn dedup_prefixes(labels: &[String], len: usize) -> Vec<String> {
    let mut out: Vec<String> = labels.iter().map(|l| l[..len].to_string()).collect();
    out.dedup();
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Enumerations
    // =========================================================================

    /// *For any* forward range, `days` yields one label per touched day,
    /// from the start's date to the end's date.
    #[test]
    fn prop_days_cover_start_to_end(range in forward_range()) {
        let days = range.days(DateFormat::Date);
        prop_assert_eq!(days.len() as u64, range.day_count());
        prop_assert_eq!(days.first().unwrap(), &range.format_start(DateFormat::Date));
        prop_assert_eq!(days.last().unwrap(), &range.format_end(DateFormat::Date));
    }

    /// *For any* forward range, months and years are the distinct prefixes
    /// of the day labels, in order.
    #[test]
    fn prop_months_and_years_follow_days(range in forward_range()) {
        let days = range.days(DateFormat::Date);
        prop_assert_eq!(range.months(DateFormat::YearMonth), dedup_prefixes(&days, 7));
        prop_assert_eq!(range.years(DateFormat::Year), dedup_prefixes(&days, 4));
    }

    // =========================================================================
    // Month splits
    // =========================================================================

    /// *For any* forward range, the pieces start at the original start, end
    /// at the original end and follow each other one second apart.
    #[test]
    fn prop_split_pieces_are_contiguous(range in forward_range()) {
        let pieces = range.split_by_month();
        prop_assert_eq!(pieces.len(), range.months(DateFormat::YearMonth).len());
        prop_assert_eq!(pieces.first().unwrap().start_utc(), range.start_utc());
        prop_assert_eq!(pieces.last().unwrap().end_utc(), range.end_utc());
        for pair in pieces.windows(2) {
            let gap = pair[1].start_utc() - pair[0].end_utc();
            prop_assert_eq!(gap.num_seconds(), 1);
        }
    }

    /// *For any* forward range, the days of the pieces concatenate to the
    /// days of the range.
    #[test]
    fn prop_split_pieces_preserve_days(range in forward_range()) {
        let pieces = range.split_by_month();
        let joined: Vec<String> = pieces
            .iter()
            .flat_map(|piece| piece.days(DateFormat::Date))
            .collect();
        prop_assert_eq!(joined, range.days(DateFormat::Date));
        prop_assert!(pieces.iter().all(|p| p.return_zone() == range.return_zone()));
    }

    // =========================================================================
    // Durations
    // =========================================================================

    /// *For any* forward range, coarser units are floors of finer ones.
    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn prop_durations_nest(range in forward_range()) {
        let seconds = range.as_seconds() as i64;
        prop_assert_eq!(range.as_minutes(), seconds.div_euclid(60));
        prop_assert_eq!(range.as_hours(), range.as_minutes().div_euclid(60));
        prop_assert_eq!(range.as_days(), range.as_hours().div_euclid(24));
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// *For any* forward range, day 1 and day -1 are the end dates, and one
    /// past the day count is rejected in both directions.
    #[test]
    fn prop_day_of_range_bounds(range in forward_range()) {
        let count = i64::try_from(range.day_count()).unwrap();
        prop_assert_eq!(range.day_of_range(1).unwrap(), range.start().date_naive());
        prop_assert_eq!(range.day_of_range(-1).unwrap(), range.end().date_naive());
        prop_assert_eq!(range.day_of_range(count).unwrap(), range.end().date_naive());
        prop_assert!(range.day_of_range(count + 1).is_err());
        prop_assert!(range.day_of_range(-(count + 1)).is_err());
    }

    /// *For any* forward range and index, counting from the end mirrors
    /// counting from the start.
    #[test]
    fn prop_day_of_range_mirrors(range in forward_range(), pick in 0u64..1_000) {
        let count = range.day_count();
        let n = i64::try_from(pick % count + 1).unwrap();
        let mirrored = i64::try_from(count).unwrap() - n + 1;
        prop_assert_eq!(range.day_of_range(-n).unwrap(), range.day_of_range(mirrored).unwrap());
    }

    /// *For any* range of at least a week, the first and last occurrence of
    /// every weekday exist and fall in the outer seven days.
    #[test]
    fn prop_weekday_of_range_first_and_last(range in forward_range(), wd in weekday()) {
        prop_assume!(range.day_count() >= 7);
        let first = range.weekday_of_range(1, wd).unwrap();
        prop_assert_eq!(first.weekday(), wd);
        prop_assert!((first - range.start().date_naive()).num_days() < 7);

        let last = range.weekday_of_range(-1, wd).unwrap();
        prop_assert_eq!(last.weekday(), wd);
        prop_assert!((range.end().date_naive() - last).num_days() < 7);
    }
}
