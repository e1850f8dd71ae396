//! Tokenizer for PHP `date()` style format strings.

use serde::{Deserialize, Serialize};

/// One unit of a `date()` pattern.
///
/// Letter tokens carry PHP's meaning; any other character, and any character
/// preceded by a backslash, is a [`Token::Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `d` - day of month, two digits.
    DayPadded,
    /// `D` - weekday, three letters.
    WeekdayShort,
    /// `j` - day of month without leading zero.
    Day,
    /// `l` - full weekday name.
    WeekdayLong,
    /// `N` - ISO weekday, 1 (Monday) to 7 (Sunday).
    IsoWeekday,
    /// `S` - English ordinal suffix for the day of month.
    OrdinalSuffix,
    /// `w` - weekday, 0 (Sunday) to 6 (Saturday).
    Weekday,
    /// `z` - day of year starting at 0.
    DayOfYear,
    /// `W` - ISO week number, two digits.
    IsoWeek,
    /// `F` - full month name.
    MonthLong,
    /// `m` - month, two digits.
    MonthPadded,
    /// `M` - month, three letters.
    MonthShort,
    /// `n` - month without leading zero.
    Month,
    /// `t` - days in the month.
    DaysInMonth,
    /// `L` - 1 for a leap year, else 0.
    LeapYear,
    /// `o` - ISO week-numbering year.
    IsoYear,
    /// `Y` - full year, at least four digits.
    Year,
    /// `y` - two digit year.
    YearShort,
    /// `a` - `am` or `pm`.
    MeridiemLower,
    /// `A` - `AM` or `PM`.
    MeridiemUpper,
    /// `B` - Swatch internet time.
    SwatchBeat,
    /// `g` - 12-hour hour without leading zero.
    Hour12,
    /// `G` - 24-hour hour without leading zero.
    Hour24,
    /// `h` - 12-hour hour, two digits.
    Hour12Padded,
    /// `H` - 24-hour hour, two digits.
    Hour24Padded,
    /// `i` - minutes, two digits.
    Minute,
    /// `s` - seconds, two digits.
    Second,
    /// `u` - microseconds, six digits.
    Micros,
    /// `v` - milliseconds, three digits.
    Millis,
    /// `e` - zone identifier.
    ZoneId,
    /// `I` - 1 while daylight saving time is in effect.
    Dst,
    /// `O` - offset without colon, `+0200`.
    Offset,
    /// `P` - offset with colon, `+02:00`.
    OffsetColon,
    /// `p` - like `P` but `Z` for a zero offset.
    OffsetColonZ,
    /// `T` - zone abbreviation.
    ZoneAbbrev,
    /// `Z` - offset in seconds.
    OffsetSeconds,
    /// `c` - ISO 8601 date and time.
    Iso8601,
    /// `r` - RFC 2822 date and time.
    Rfc2822,
    /// `U` - seconds since the Unix epoch.
    UnixTimestamp,
    /// Printed as is.
    Literal(char),
}

impl Token {
    fn from_letter(c: char) -> Self {
        match c {
            'd' => Self::DayPadded,
            'D' => Self::WeekdayShort,
            'j' => Self::Day,
            'l' => Self::WeekdayLong,
            'N' => Self::IsoWeekday,
            'S' => Self::OrdinalSuffix,
            'w' => Self::Weekday,
            'z' => Self::DayOfYear,
            'W' => Self::IsoWeek,
            'F' => Self::MonthLong,
            'm' => Self::MonthPadded,
            'M' => Self::MonthShort,
            'n' => Self::Month,
            't' => Self::DaysInMonth,
            'L' => Self::LeapYear,
            'o' => Self::IsoYear,
            'Y' => Self::Year,
            'y' => Self::YearShort,
            'a' => Self::MeridiemLower,
            'A' => Self::MeridiemUpper,
            'B' => Self::SwatchBeat,
            'g' => Self::Hour12,
            'G' => Self::Hour24,
            'h' => Self::Hour12Padded,
            'H' => Self::Hour24Padded,
            'i' => Self::Minute,
            's' => Self::Second,
            'u' => Self::Micros,
            'v' => Self::Millis,
            'e' => Self::ZoneId,
            'I' => Self::Dst,
            'O' => Self::Offset,
            'P' => Self::OffsetColon,
            'p' => Self::OffsetColonZ,
            'T' => Self::ZoneAbbrev,
            'Z' => Self::OffsetSeconds,
            'c' => Self::Iso8601,
            'r' => Self::Rfc2822,
            'U' => Self::UnixTimestamp,
            other => Self::Literal(other),
        }
    }
}

/// A parsed `date()` format string.
///
/// Parsing never fails: PHP prints unknown letters verbatim, and so does this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Tokenizes `source`. A backslash makes the next character literal; a
    /// trailing backslash is printed as is.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut tokens = Vec::with_capacity(source.len());
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                tokens.push(Token::Literal(chars.next().unwrap_or('\\')));
            } else {
                tokens.push(Token::from_letter(c));
            }
        }
        Self {
            source: source.to_string(),
            tokens,
        }
    }

    /// The string this pattern was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Pattern> for String {
    fn from(value: Pattern) -> Self {
        value.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_and_literals() {
        let pattern = Pattern::parse("Y-m-d H:i");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Year,
                Token::Literal('-'),
                Token::MonthPadded,
                Token::Literal('-'),
                Token::DayPadded,
                Token::Literal(' '),
                Token::Hour24Padded,
                Token::Literal(':'),
                Token::Minute,
            ]
        );
        assert_eq!(pattern.as_str(), "Y-m-d H:i");
    }

    #[test]
    fn test_backslash_escapes() {
        let pattern = Pattern::parse(r"\Y\\Y");
        assert_eq!(
            pattern.tokens(),
            &[Token::Literal('Y'), Token::Literal('\\'), Token::Year]
        );

        let trailing = Pattern::parse("Y\\");
        assert_eq!(trailing.tokens(), &[Token::Year, Token::Literal('\\')]);
    }

    #[test]
    fn test_unknown_letters_are_literal() {
        let pattern = Pattern::parse("xQ");
        assert_eq!(
            pattern.tokens(),
            &[Token::Literal('x'), Token::Literal('Q')]
        );
    }
}
