//! Inclusive spans of calendar days, the standard named spans, and an
//! iterator for walking through them a day at a time.

use std::str::FromStr;

use crate::cal::date::CalendarDate;
use crate::cal::math::Month;
use crate::cal::DatePiece;
use crate::interval::{Interval, Unit};


/// An inclusive span of calendar days, from `start` to `end`.
///
/// The endpoints are owned copies, so nothing the caller later does to
/// its own dates can reach inside a range. A range whose start is after
/// its end is legal; it just contains no days.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {

    /// Creates a range spanning `start` to `end` inclusive.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end
    }

    /// Returns whether the given day falls within this range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns an iterator over every day in the range, in order. Each
    /// call starts afresh from `start`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDate, DateRange, Month};
    ///
    /// let range = DateRange::new(CalendarDate::new(1999, Month::December, 30),
    ///                            CalendarDate::new(2000, Month::January, 2));
    /// assert_eq!(range.iter().count(), 4);
    /// ```
    pub fn iter(&self) -> Days {
        Days {
            next: self.start,
            end_key: self.end.compact_int(),
        }
    }

    /// The day before `today`, as a single-day range.
    pub fn yesterday(today: CalendarDate) -> Self {
        let yesterday = offset_in_days(today, -1);
        Self::new(yesterday, yesterday)
    }

    /// Just `today`, as a single-day range.
    pub fn today(today: CalendarDate) -> Self {
        Self::new(today, today)
    }

    /// The seven days before `today`, not including `today` itself.
    pub fn last_7_days(today: CalendarDate) -> Self {
        Self::new(offset_in_days(today, -7), offset_in_days(today, -1))
    }

    /// The calendar month `today` falls in.
    pub fn this_month(today: CalendarDate) -> Self {
        Self::new(offset_in_months(today, 0),
                  offset_in_days(offset_in_months(today, 1), -1))
    }

    /// The calendar month before the one `today` falls in.
    pub fn last_month(today: CalendarDate) -> Self {
        Self::new(offset_in_months(today, -1),
                  offset_in_days(offset_in_months(today, 0), -1))
    }

    /// The Monday-to-Sunday week `today` falls in.
    pub fn this_week(today: CalendarDate) -> Self {
        let monday = offset_in_days(today, -(today.iso_weekday() as i64));
        Self::new(monday, offset_in_days(monday, 6))
    }

    /// The Monday-to-Sunday week before the one `today` falls in.
    pub fn last_week(today: CalendarDate) -> Self {
        let monday = offset_in_days(today, -7 - today.iso_weekday() as i64);
        Self::new(monday, offset_in_days(monday, 6))
    }

    /// Monday to Friday of the week before the one `today` falls in.
    pub fn last_business_week(today: CalendarDate) -> Self {
        let monday = offset_in_days(today, -7 - today.iso_weekday() as i64);
        Self::new(monday, offset_in_days(monday, 4))
    }

    /// Every representable day: the 1st of January of year 0 to the
    /// 31st of December of year 9999.
    pub fn all_time() -> Self {
        Self::new(CalendarDate::new(0, Month::January, 1),
                  CalendarDate::new(9999, Month::December, 31))
    }

    /// Builds the standard range named by `key`, relative to `today`.
    /// An unrecognized key is an error, never silently some default
    /// range.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDate, DateRange, Month};
    ///
    /// let today = CalendarDate::new(2024, Month::June, 5);
    /// let range = DateRange::standard("thisweek", today).unwrap();
    /// assert_eq!(range.start_date(), CalendarDate::new(2024, Month::June, 3));
    ///
    /// assert!(DateRange::standard("fortnight", today).is_err());
    /// ```
    pub fn standard(key: &str, today: CalendarDate) -> Result<Self, RangeError> {
        let preset = key.parse::<StandardRange>()?;
        log::trace!("standard range {:?} for {}", key, today);
        Ok(preset.range(today))
    }
}

impl<'range> IntoIterator for &'range DateRange {
    type Item = CalendarDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}


/// Returns a copy of the date, `n` days along.
fn offset_in_days(date: CalendarDate, n: i64) -> CalendarDate {
    date.add(&Interval::of(Unit::Days, n))
}

/// Returns a copy of the date, `n` months along, pinned to the first of
/// the month so that short months can’t clamp it.
fn offset_in_months(date: CalendarDate, n: i64) -> CalendarDate {
    date.with_day(1).add(&Interval::of(Unit::Months, n))
}


/// The names of the standard date ranges, and the string keys they
/// dispatch on.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum StandardRange {
    Yesterday,
    Today,
    Last7Days,
    ThisMonth,
    LastMonth,
    ThisWeek,
    LastWeek,
    LastBusinessWeek,
    AllTime,
}

impl StandardRange {

    /// The string key this range dispatches on.
    pub fn key(self) -> &'static str {
        match self {
            Self::Yesterday        => "yesterday",
            Self::Today            => "today",
            Self::Last7Days        => "last7days",
            Self::ThisMonth        => "thismonth",
            Self::LastMonth        => "lastmonth",
            Self::ThisWeek         => "thisweek",
            Self::LastWeek         => "lastweek",
            Self::LastBusinessWeek => "lastbusinessweek",
            Self::AllTime          => "alltime",
        }
    }

    /// Builds this range relative to `today`.
    pub fn range(self, today: CalendarDate) -> DateRange {
        match self {
            Self::Yesterday        => DateRange::yesterday(today),
            Self::Today            => DateRange::today(today),
            Self::Last7Days        => DateRange::last_7_days(today),
            Self::ThisMonth        => DateRange::this_month(today),
            Self::LastMonth        => DateRange::last_month(today),
            Self::ThisWeek         => DateRange::this_week(today),
            Self::LastWeek         => DateRange::last_week(today),
            Self::LastBusinessWeek => DateRange::last_business_week(today),
            Self::AllTime          => DateRange::all_time(),
        }
    }
}

impl FromStr for StandardRange {
    type Err = RangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        for preset in [Self::Yesterday, Self::Today, Self::Last7Days,
                       Self::ThisMonth, Self::LastMonth, Self::ThisWeek,
                       Self::LastWeek, Self::LastBusinessWeek, Self::AllTime] {
            if input == preset.key() {
                return Ok(preset);
            }
        }

        Err(RangeError::UnknownPreset(input.into()))
    }
}


/// The error returned when a standard-range key is not one of the nine
/// known presets.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum RangeError {

    #[error("unrecognized standard date range key {0:?}")]
    UnknownPreset(String),
}


/// An iterator over every day in a [`DateRange`], in order.
///
/// Termination compares the `YYYYMMDD` integer encodings of the cursor
/// and the end date, so it is a pure calendar comparison; and once the
/// cursor has walked past the end, it stays there. An exhausted
/// iterator keeps returning `None` until a fresh one is made.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Days {
    next: CalendarDate,
    end_key: i64,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        if self.next.compact_int() > self.end_key {
            return None;
        }

        let current = self.next;
        self.next = offset_in_days(current, 1);
        Some(current)
    }
}
