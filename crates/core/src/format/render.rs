//! Token rendering with PHP `date()` semantics.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Offset, Timelike, Weekday};
use chrono_tz::{OffsetComponents, Tz};

use super::pattern::Token;
use crate::zone::days_in_month;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders `tokens` for `dt`.
pub(crate) fn render(tokens: &[Token], dt: &DateTime<Tz>) -> String {
    let mut out = String::with_capacity(tokens.len() * 2);
    for token in tokens {
        push_token(&mut out, *token, dt);
    }
    out
}

fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn offset_seconds(dt: &DateTime<Tz>) -> i32 {
    dt.offset().fix().local_minus_utc()
}

fn push_offset(out: &mut String, seconds: i32, colon: bool) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let (hours, minutes) = (abs / 3600, abs % 3600 / 60);
    if colon {
        let _ = write!(out, "{sign}{hours:02}:{minutes:02}");
    } else {
        let _ = write!(out, "{sign}{hours:02}{minutes:02}");
    }
}

fn push_year(out: &mut String, year: i32) {
    if year < 0 {
        let _ = write!(out, "-{:04}", year.unsigned_abs());
    } else {
        let _ = write!(out, "{year:04}");
    }
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn push_token(out: &mut String, token: Token, dt: &DateTime<Tz>) {
    // Writing into a String cannot fail.
    let _ = match token {
        Token::DayPadded => write!(out, "{:02}", dt.day()),
        Token::WeekdayShort => write!(out, "{}", &weekday_name(dt.weekday())[..3]),
        Token::Day => write!(out, "{}", dt.day()),
        Token::WeekdayLong => write!(out, "{}", weekday_name(dt.weekday())),
        Token::IsoWeekday => write!(out, "{}", dt.weekday().number_from_monday()),
        Token::OrdinalSuffix => write!(out, "{}", ordinal_suffix(dt.day())),
        Token::Weekday => write!(out, "{}", dt.weekday().num_days_from_sunday()),
        Token::DayOfYear => write!(out, "{}", dt.ordinal0()),
        Token::IsoWeek => write!(out, "{:02}", dt.iso_week().week()),
        Token::MonthLong => write!(out, "{}", month_name(dt.month())),
        Token::MonthPadded => write!(out, "{:02}", dt.month()),
        Token::MonthShort => write!(out, "{}", &month_name(dt.month())[..3]),
        Token::Month => write!(out, "{}", dt.month()),
        Token::DaysInMonth => write!(out, "{}", days_in_month(dt.date_naive())),
        Token::LeapYear => write!(out, "{}", u8::from(dt.date_naive().leap_year())),
        Token::IsoYear => {
            push_year(out, dt.iso_week().year());
            Ok(())
        }
        Token::Year => {
            push_year(out, dt.year());
            Ok(())
        }
        Token::YearShort => write!(out, "{:02}", dt.year().rem_euclid(100)),
        Token::MeridiemLower => out.write_str(if dt.hour() < 12 { "am" } else { "pm" }),
        Token::MeridiemUpper => out.write_str(if dt.hour() < 12 { "AM" } else { "PM" }),
        Token::SwatchBeat => {
            // Biel Mean Time is UTC+1.
            let seconds = (dt.timestamp() + 3600).rem_euclid(86_400);
            write!(out, "{:03}", seconds * 1000 / 86_400)
        }
        Token::Hour12 => write!(out, "{}", hour12(dt.hour())),
        Token::Hour24 => write!(out, "{}", dt.hour()),
        Token::Hour12Padded => write!(out, "{:02}", hour12(dt.hour())),
        Token::Hour24Padded => write!(out, "{:02}", dt.hour()),
        Token::Minute => write!(out, "{:02}", dt.minute()),
        Token::Second => write!(out, "{:02}", dt.second()),
        Token::Micros => write!(out, "{:06}", dt.timestamp_subsec_micros() % 1_000_000),
        Token::Millis => write!(out, "{:03}", dt.timestamp_subsec_millis() % 1_000),
        Token::ZoneId => out.write_str(dt.timezone().name()),
        Token::Dst => {
            let dst = !dt.offset().dst_offset().is_zero();
            write!(out, "{}", u8::from(dst))
        }
        Token::Offset => {
            push_offset(out, offset_seconds(dt), false);
            Ok(())
        }
        Token::OffsetColon => {
            push_offset(out, offset_seconds(dt), true);
            Ok(())
        }
        Token::OffsetColonZ => match offset_seconds(dt) {
            0 => out.write_str("Z"),
            seconds => {
                push_offset(out, seconds, true);
                Ok(())
            }
        },
        Token::ZoneAbbrev => write!(out, "{}", dt.offset()),
        Token::OffsetSeconds => write!(out, "{}", offset_seconds(dt)),
        Token::Iso8601 => {
            push_year(out, dt.year());
            let _ = write!(
                out,
                "-{:02}-{:02}T{:02}:{:02}:{:02}",
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            );
            push_offset(out, offset_seconds(dt), true);
            Ok(())
        }
        Token::Rfc2822 => {
            let _ = write!(
                out,
                "{}, {:02} {} ",
                &weekday_name(dt.weekday())[..3],
                dt.day(),
                &month_name(dt.month())[..3]
            );
            push_year(out, dt.year());
            let _ = write!(
                out,
                " {:02}:{:02}:{:02} ",
                dt.hour(),
                dt.minute(),
                dt.second()
            );
            push_offset(out, offset_seconds(dt), false);
            Ok(())
        }
        Token::UnixTimestamp => write!(out, "{}", dt.timestamp()),
        Token::Literal(c) => out.write_char(c),
    };
}
