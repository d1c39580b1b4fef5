//! The calendar primitives everything else is built from: leap years,
//! month lengths, week numbers, and the bridge between calendar dates and
//! days-since-the-epoch.
//!
//! All functions here are pure; nothing reads a clock or a locale table
//! behind the caller’s back.

use crate::cal::{Error, WeekLocale};

use self::Month::*;
use self::Weekday::*;


/// Number of milliseconds in a day. As everywhere in this library, leap
/// seconds are simply ignored.
pub(crate) const MS_PER_DAY: i64 = 86_400_000;

/// Number of days between the proleptic-Gregorian year 0 and the Unix
/// epoch, used to shift the 400-year-cycle arithmetic onto the epoch.
const DAYS_FROM_YEAR_0_TO_EPOCH: i64 = 719_468;

/// Number of days in one full 400-year Gregorian cycle (97 leap years
/// and 303 ordinary ones).
const DAYS_IN_ERA: i64 = 146_097;


/// Returns whether the given year is a leap year: divisible by four,
/// unless it is a century year not divisible by four hundred.
///
/// ### Examples
///
/// ```
/// use caldate::is_leap_year;
///
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(1900), false);
/// assert_eq!(is_leap_year(2024), true);
/// ```
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}


/// Returns the number of days in the given month of the given year.
pub fn days_in_month(year: i64, month: Month) -> i8 {
    month.days_in_month(is_leap_year(year))
}


/// Returns whether the given ISO 8601 week-numbering year is a *long*
/// year, one with 53 weeks instead of 52.
///
/// This is a closed-form number-theoretic identity over the 400-year
/// Gregorian cycle. It is kept in exactly this shape so that century and
/// 400-year boundaries agree bit-for-bit with the week arithmetic in the
/// rest of this module.
pub fn is_long_iso_year(year: i64) -> bool {
    let n = 5 * year + 12
        - 4 * (year.div_euclid(100) - year.div_euclid(400))
        + (year - 100).div_euclid(400) - (year - 102).div_euclid(400)
        + (year - 200).div_euclid(400) - (year - 199).div_euclid(400);

    n.rem_euclid(28) < 5
}


/// Computes the week number of the given calendar day, under the given
/// locale’s first-day-of-week and cutoff-weekday settings. The defaults
/// produce ISO 8601 week numbers, from 1 to 53.
///
/// The computation shifts the date to the cutoff weekday of the same
/// week in millisecond space, then counts days from the 1st of January
/// of the year that shifted instant lands in. The day count is *rounded*
/// rather than truncated, so that an hour of daylight-saving skew in the
/// shifted instant cannot move the result across a day boundary.
pub fn week_number(year: i64, month: Month, day: i8, locale: WeekLocale) -> i64 {
    let days = days_from_civil(year, month, day as i64);

    let firstday = locale.first_day_of_week.days_from_monday() as i64;
    let daypos = (weekday_from_days(days).days_from_monday() as i64 - firstday).rem_euclid(7);
    let cutoffpos = (locale.cutoff_weekday.days_from_monday() as i64 - firstday).rem_euclid(7);

    // The cutoff weekday of the same week as the target date.
    let cutoff_ms = days * MS_PER_DAY + (cutoffpos - daypos) * MS_PER_DAY;

    let (cutoff_year, _, _) = civil_from_days(cutoff_ms.div_euclid(MS_PER_DAY));
    let jan1_ms = days_from_civil(cutoff_year, January, 1) * MS_PER_DAY;

    let day_count = ((cutoff_ms - jan1_ms) as f64 / MS_PER_DAY as f64).round() as i64;
    day_count.div_euclid(7) + 1
}


/// Calculates the number of days between the given calendar day and the
/// 1st of January 1970. The day number may be outside the month’s actual
/// range, in which case it keeps counting into the months that follow;
/// this is what gives the raw field constructors their rollover
/// behaviour.
pub(crate) fn days_from_civil(year: i64, month: Month, day: i64) -> i64 {
    let m = month.months_from_january() as i64 + 1;
    let y = if m <= 2 { year - 1 } else { year };

    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;

    // Day of a March-based year: shifting the year to start in March
    // pushes the leap day to the very end, which makes the month-length
    // pattern a single linear ramp.
    let shifted_month = if m > 2 { m - 3 } else { m + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;

    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_ERA + day_of_era - DAYS_FROM_YEAR_0_TO_EPOCH
}


/// The inverse of `days_from_civil`: computes the year, month, and
/// day-of-month of the given number of days since the 1st of January
/// 1970.
pub(crate) fn civil_from_days(days: i64) -> (i64, Month, i8) {
    let shifted = days + DAYS_FROM_YEAR_0_TO_EPOCH;
    let era = shifted.div_euclid(DAYS_IN_ERA);
    let day_of_era = shifted - era * DAYS_IN_ERA;

    let year_of_era = (day_of_era
        - day_of_era / 1460
        + day_of_era / 36_524
        - day_of_era / (DAYS_IN_ERA - 1)) / 365;

    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let m = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
    let year = year_of_era + era * 400 + if m <= 2 { 1 } else { 0 };

    // The shifted month is in (0..12) by construction, so m is a real
    // month number and the unwrap cannot fire.
    (year, Month::from_one(m as i8).unwrap(), day as i8)
}


/// Computes the weekday of the given number of days since the epoch.
/// The 1st of January 1970 was a Thursday.
pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    // Thursday is day 4 in the Sunday-first numbering, and the bounds
    // check has already happened, so we can unwrap.
    Weekday::from_zero((days + 4).rem_euclid(7) as i8).unwrap()
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub fn months_from_january(self) -> usize {
        match self {
            January =>   0, February =>   1, March     =>  2,
            April   =>   3, May      =>   4, June      =>  5,
            July    =>   6, August   =>   7, September =>  8,
            October =>   9, November =>  10, December  => 11,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use caldate::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use caldate::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Ok(match month {
            0 => January,   1 => February,   2 => March,
            3 => April,     4 => May,        5 => June,
            6 => July,      7 => August,     8 => September,
            9 => October,  10 => November,  11 => December,
            _ => return Err(Error::OutOfRange),
        })
    }
}


/// A named day of the week.
///
/// Sunday is day 0 here, mirroring the numbering most host platforms
/// use; the ISO 8601 Monday-first index is available through
/// `days_from_monday`. There is no `Ord` instance because there’s no
/// one standard for whether Sunday precedes Monday, and the ordering is
/// never what date comparisons want anyway.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

impl Weekday {

    /// The ISO 8601 index of this weekday, where Monday is 0 and Sunday
    /// is 6.
    pub fn days_from_monday(self) -> i8 {
        match self {
            Monday   => 0,  Tuesday  => 1,  Wednesday => 2,
            Thursday => 3,  Friday   => 4,  Saturday  => 5,
            Sunday   => 6,
        }
    }

    /// The US-style index of this weekday, where Sunday is 0 and
    /// Saturday is 6.
    pub fn days_from_sunday(self) -> i8 {
        match self {
            Sunday   => 0,  Monday    => 1,  Tuesday => 2,
            Wednesday=> 3,  Thursday  => 4,  Friday  => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use caldate::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }

    /// Return the weekday based on the ISO 8601 numbering, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            7 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }
}
