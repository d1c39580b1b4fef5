//! ISO-8601 date and time calculations, which use years, months, days,
//! hours, minutes, and seconds.

pub(crate) mod date;
pub(crate) mod datetime;
pub(crate) mod fmt;
pub(crate) mod math;
pub(crate) mod offset;
pub(crate) mod parse;

pub use self::date::CalendarDate;
pub use self::datetime::{CalendarDateTime, TimeOfDay, UtcDateTime};
pub use self::fmt::IsoStyle;
pub use self::math::{days_in_month, is_leap_year, is_long_iso_year, week_number, Month, Weekday};
pub use self::offset::{FixedOffset, OffsetError};
pub use self::parse::{parse_date, parse_datetime, parse_utc_datetime, ParseError};

/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week, US-style (Sunday is day 0).
    fn weekday(&self) -> Weekday;

    /// The day of the week as an ISO 8601 index, where Monday is 0 and
    /// Sunday is 6.
    fn iso_weekday(&self) -> i8 {
        self.weekday().days_from_monday()
    }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;
}


/// The locale-supplied pair of week-numbering settings: which weekday a
/// week starts on, and which weekday decides whether a boundary week
/// belongs to the old year or the new one.
///
/// The default (weeks start on Monday, Thursday is the cutoff) is the
/// ISO 8601 rule. Callers with a locale table pass their own values here;
/// there is no process-wide state to configure.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct WeekLocale {

    /// The first day of the week.
    pub first_day_of_week: Weekday,

    /// The weekday that decides which year a boundary week belongs to:
    /// a week is in the year that this weekday of it falls in.
    pub cutoff_weekday: Weekday,
}

impl Default for WeekLocale {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Monday,
            cutoff_weekday: Weekday::Thursday,
        }
    }
}


/// The error returned when a checked constructor is handed a field value
/// outside the range that field allows.
#[derive(PartialEq, Eq, Debug, Copy, Clone, thiserror::Error)]
pub enum Error {

    /// A field was outside its allowed range.
    #[error("calendar field out of range")]
    OutOfRange,
}
