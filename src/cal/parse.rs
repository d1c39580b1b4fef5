//! Parsing ISO 8601 strings into dates and date-times.
//!
//! The input splits at the first `T` (or space) into a date token and an
//! optional time token. A date token takes exactly one of three shapes
//! (calendar, ordinal, or week date), which the scanner returns as a
//! tagged union, so every consumer has to say what it does with all
//! three. Numeric fields are *not* range-checked beyond what the shapes
//! themselves require: a `2015-02-31` rolls over into March the same way
//! raw numeric construction does.

use std::str::FromStr;

use crate::cal::date::CalendarDate;
use crate::cal::datetime::{CalendarDateTime, TimeOfDay, UtcDateTime};
use crate::cal::math::{days_from_civil, weekday_from_days, Month, MS_PER_DAY};
use crate::cal::offset::FixedOffset;
use crate::cal::WeekLocale;


/// The error returned when a string doesn’t scan as ISO 8601.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ParseError {

    /// The date token matches none of the calendar, ordinal, or
    /// week-date forms.
    #[error("not an ISO 8601 date: {0:?}")]
    Date(String),

    /// The time token doesn’t follow `HH[:MM[:SS[.fff]]]` with an
    /// optional zone suffix.
    #[error("not an ISO 8601 time: {0:?}")]
    Time(String),
}


/// The three shapes an ISO 8601 date token can take. Exactly one of
/// them matches any given token.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum DateToken {

    /// `YYYY[-]MM[-DD]`, with the day (or the whole month-and-day)
    /// allowed to be absent.
    Calendar { year: i64, month: i64, day: i64 },

    /// `YYYY[-]DDD`: a year and a day-of-year.
    Ordinal { year: i64, day_of_year: i64 },

    /// `YYYY[-]Www[-D]`: a week date, with the weekday numbered 1
    /// (Monday) to 7 (Sunday) and defaulting to Monday.
    Week { year: i64, week: i64, weekday: i64 },
}

/// The fields of a scanned time token.
struct TimeToken {
    hour: i64,
    minute: i64,
    second: i64,
    millisecond: i64,

    /// The zone suffix, as minutes east of UTC, if one was present.
    offset_minutes: Option<i64>,
}


/// Parses a date-only ISO 8601 string. The whole input must be a date
/// token; use `parse_datetime` for strings with a time part.
pub fn parse_date(input: &str, locale: WeekLocale) -> Result<CalendarDate, ParseError> {
    match scan_date_token(input) {
        Some(token) => Ok(resolve_date_token(token, locale)),
        None => {
            log::debug!("{:?} matches no ISO 8601 date form", input);
            Err(ParseError::Date(input.into()))
        }
    }
}

/// Parses an ISO 8601 date or date-time string into a date-time whose
/// wall fields are at `offset`.
///
/// A missing time token means midnight. A zone suffix on the time token
/// says which offset the written fields are in; the result is shifted
/// by the difference, so the instant it denotes is exact no matter what
/// `offset` the caller reads it at.
pub fn parse_datetime(input: &str, offset: FixedOffset, locale: WeekLocale)
    -> Result<CalendarDateTime, ParseError>
{
    let (date_part, time_part) = match input.find(|c| c == 'T' || c == ' ') {
        Some(split) => (&input[..split], Some(&input[split + 1..])),
        None => (input, None),
    };

    let token = scan_date_token(date_part).ok_or_else(|| {
        log::debug!("date token {:?} matches no ISO 8601 date form", date_part);
        ParseError::Date(input.into())
    })?;
    let date = resolve_date_token(token, locale);

    let time = match time_part {
        Some(part) => scan_time_token(part).ok_or_else(|| {
            log::debug!("time token {:?} matches no ISO 8601 time form", part);
            ParseError::Time(input.into())
        })?,
        None => {
            return Ok(CalendarDateTime::new(date, TimeOfDay::midnight()).with_offset(offset));
        }
    };

    let mut wall = date.epoch_days() * MS_PER_DAY
        + ((time.hour * 60 + time.minute) * 60 + time.second) * 1_000
        + time.millisecond;

    if let Some(written_in) = time.offset_minutes {
        // The fields were written at some other offset; carry them over
        // to ours so the instant stays put.
        wall += (offset.minutes() as i64 - written_in) * 60_000;
    }

    Ok(CalendarDateTime::from_wall_ms(wall, offset, locale))
}

/// Parses an ISO 8601 date or date-time string as a UTC date-time.
pub fn parse_utc_datetime(input: &str) -> Result<UtcDateTime, ParseError> {
    let parsed = parse_datetime(input, FixedOffset::utc(), WeekLocale::default())?;
    Ok(parsed.utc())
}


impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_date(input, WeekLocale::default())
    }
}

impl FromStr for CalendarDateTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_datetime(input, FixedOffset::utc(), WeekLocale::default())
    }
}

impl FromStr for UtcDateTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_utc_datetime(input)
    }
}


/// Turns a scanned date token into a real calendar day.
fn resolve_date_token(token: DateToken, locale: WeekLocale) -> CalendarDate {
    match token {
        DateToken::Calendar { year, month, day } => {
            CalendarDate::from_fields(year, month, day).with_week_locale(locale)
        }

        DateToken::Ordinal { year, day_of_year } => {
            // Walk forward from the 1st of January; a day-of-year past
            // the end of the year keeps walking, like any other rollover.
            let days = days_from_civil(year, Month::January, 1) + day_of_year - 1;
            CalendarDate::from_epoch_days(days, locale)
        }

        DateToken::Week { year, week, weekday } => {
            // Week 1 is the week containing the 4th of January, so the
            // weekday of the 4th tells us how far week 1’s Monday is
            // before it. Dates early in week 1 or late in week 53 land
            // in the neighbouring year; the epoch-day arithmetic takes
            // care of that by itself.
            let jan4 = days_from_civil(year, Month::January, 4);
            let correction = weekday_from_days(jan4).days_from_monday() as i64 + 4;

            let yearday = 7 * week + weekday - correction;
            let days = days_from_civil(year, Month::January, 1) + yearday - 1;
            CalendarDate::from_epoch_days(days, locale)
        }
    }
}


/// Scans a date token, or returns `None` if the input is not one.
fn scan_date_token(input: &str) -> Option<DateToken> {
    let (year, rest) = take_digits(input, 4)?;
    if rest.is_empty() {
        return Some(DateToken::Calendar { year, month: 1, day: 1 });
    }

    let rest = rest.strip_prefix('-').unwrap_or(rest);

    if let Some(rest) = rest.strip_prefix('W') {
        let (week, rest) = take_digits(rest, 2)?;
        if rest.is_empty() {
            return Some(DateToken::Week { year, week, weekday: 1 });
        }

        let rest = rest.strip_prefix('-').unwrap_or(rest);
        let (weekday, rest) = take_digits(rest, 1)?;
        if rest.is_empty() && (1..=7).contains(&weekday) {
            return Some(DateToken::Week { year, week, weekday });
        }
        return None;
    }

    // Three digits and nothing else is an ordinal date; otherwise the
    // token can only be a month and an optional day.
    if digit_run(rest) == 3 && rest.len() == 3 {
        let (day_of_year, _) = take_digits(rest, 3)?;
        return Some(DateToken::Ordinal { year, day_of_year });
    }

    let (month, rest) = take_digits(rest, 2)?;
    if rest.is_empty() {
        return Some(DateToken::Calendar { year, month, day: 1 });
    }

    let rest = rest.strip_prefix('-').unwrap_or(rest);
    let (day, rest) = take_digits(rest, 2)?;
    if rest.is_empty() {
        Some(DateToken::Calendar { year, month, day })
    }
    else {
        None
    }
}

/// Scans a time token, `HH[:MM[:SS[.fff]]]` with each colon optional
/// and an optional trailing zone suffix, or returns `None`.
fn scan_time_token(input: &str) -> Option<TimeToken> {
    let (hour, mut rest) = take_digits(input, 2)?;
    let mut minute = 0;
    let mut second = 0;
    let mut millisecond = 0;

    let after_colon = rest.strip_prefix(':').unwrap_or(rest);
    if digit_run(after_colon) >= 2 {
        let (m, r) = take_digits(after_colon, 2)?;
        minute = m;
        rest = r;

        let after_colon = rest.strip_prefix(':').unwrap_or(rest);
        if digit_run(after_colon) >= 2 {
            let (s, r) = take_digits(after_colon, 2)?;
            second = s;
            rest = r;

            if let Some(frac) = rest.strip_prefix('.') {
                let span = digit_run(frac);
                if span == 0 {
                    return None;
                }
                let fraction: f64 = format!("0.{}", &frac[..span]).parse().ok()?;
                millisecond = (fraction * 1_000.0).round() as i64;
                rest = &frac[span..];
            }
        }
    }

    let offset_minutes = match rest {
        "" => None,
        "Z" => Some(0),
        _ => Some(scan_zone_suffix(rest)?),
    };

    Some(TimeToken { hour, minute, second, millisecond, offset_minutes })
}

/// Scans a `±HH[:MM]` (or `±HHMM`) zone suffix into minutes east of UTC.
fn scan_zone_suffix(input: &str) -> Option<i64> {
    let sign = match input.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };

    let (hours, rest) = take_digits(&input[1..], 2)?;
    if rest.is_empty() {
        return Some(sign * hours * 60);
    }

    let rest = rest.strip_prefix(':').unwrap_or(rest);
    let (minutes, rest) = take_digits(rest, 2)?;
    if rest.is_empty() {
        Some(sign * (hours * 60 + minutes))
    }
    else {
        None
    }
}


/// Splits exactly `count` ASCII digits off the front of the input.
fn take_digits(input: &str, count: usize) -> Option<(i64, &str)> {
    if input.len() < count || !input.as_bytes()[..count].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let value = input[..count].parse().ok()?;
    Some((value, &input[count..]))
}

/// The length of the run of ASCII digits at the front of the input.
fn digit_run(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}
