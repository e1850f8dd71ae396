//! Wall-clock helpers on top of `chrono-tz`.
//!
//! Every local time the crate builds (midnights, month ends, fiscal
//! boundaries) goes through [`localize`], so DST gaps and overlaps are
//! resolved the same way everywhere.

use chrono::{DateTime, Datelike, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Maps a wall-clock time in `zone` to an instant.
///
/// - Ambiguous times (clocks turned back) resolve to the earlier instant.
/// - Skipped times (clocks turned forward) are shifted forward by the length
///   of the gap, e.g. 02:30 on a spring-forward night becomes 03:30.
pub fn localize(zone: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            // Interpret the skipped time with the offset in force before the gap.
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .and_then(|probe| zone.from_local_datetime(&probe).earliest())
                .map(|dt| i64::from(dt.offset().fix().local_minus_utc()));
            let utc = before
                .and_then(|secs| naive.checked_sub_signed(TimeDelta::seconds(secs)))
                .unwrap_or(naive);
            zone.from_utc_datetime(&utc)
        }
    }
}

/// First instant of `date` in `zone`.
pub fn local_midnight(zone: Tz, date: NaiveDate) -> DateTime<Tz> {
    localize(zone, date.and_time(NaiveTime::MIN))
}

/// 23:59:59 on `date` in `zone`.
pub fn local_end_of_day(zone: Tz, date: NaiveDate) -> DateTime<Tz> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    localize(zone, date.and_time(last_second))
}

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_day_of_month(date).day()
}
