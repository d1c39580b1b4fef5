//! Calendar days with a time of day attached: the local kind, which
//! carries a fixed UTC offset, and the UTC kind, which is pinned to
//! offset zero.
//!
//! There is no inheritance here. Both date-time types are built out of
//! the same [`CalendarDate`] arithmetic and a shared wall-milliseconds
//! bridge; `UtcDateTime` is its own struct that delegates with the
//! offset forced to zero, rather than a subclass that has to override
//! everything it inherits.

use std::cmp::Ordering;

use crate::cal::date::CalendarDate;
use crate::cal::math::{Month, Weekday, MS_PER_DAY};
use crate::cal::offset::FixedOffset;
use crate::cal::{DatePiece, Error, TimePiece, WeekLocale};
use crate::clock::Clock;
use crate::interval::Interval;
use crate::util::{split_cycle, RangeExt};


/// A **time of day** is a time that recurs once a day, to millisecond
/// precision.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct TimeOfDay {
    hour:   i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

impl TimeOfDay {

    /// The time at midnight, with all fields zero.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Creates a time with the given hour and minute fields, and the
    /// second and millisecond fields set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, 0, 0)
    }

    /// Creates a time with the given hour, minute, and second fields,
    /// and the millisecond field set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a time with all four fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && millisecond.is_within(0..1000)
        {
            Ok(Self { hour, minute, second, millisecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Computes the hour, minute, second, and millisecond from a count
    /// of milliseconds since midnight, which must be within the day.
    pub(crate) fn from_ms_of_day(ms: i64) -> Self {
        Self {
            hour:   (ms / 3_600_000) as i8,
            minute: (ms / 60_000 % 60) as i8,
            second: (ms / 1_000 % 60) as i8,
            millisecond: (ms % 1_000) as i16,
        }
    }

    /// This time as a count of milliseconds since midnight.
    pub(crate) fn ms_of_day(self) -> i64 {
        ((self.hour as i64 * 60 + self.minute as i64) * 60 + self.second as i64) * 1_000
            + self.millisecond as i64
    }
}

impl TimePiece for TimeOfDay {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn millisecond(&self) -> i16 { self.millisecond }
}


/// A **calendar date-time** is an exact instant on the timeline,
/// described by the wall-clock fields at some fixed UTC offset.
///
/// The stored fields are the *local* ones; the instant they denote is
/// those fields minus the offset. Two date-times are equal when they
/// denote the same instant, whatever offsets they are written in.
#[derive(Copy, Clone)]
pub struct CalendarDateTime {
    date: CalendarDate,
    time: TimeOfDay,
    offset: FixedOffset,
}

impl CalendarDateTime {

    /// Creates a date-time from a date and a time of day, at offset
    /// zero. Use `with_offset` to reinterpret the same wall fields at
    /// another offset.
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time, offset: FixedOffset::utc() }
    }

    /// Creates a date-time from raw numeric fields, at offset zero,
    /// with the month numbered from one. Like the raw [`CalendarDate`]
    /// constructor this never fails: out-of-range time fields (a 61st
    /// second included) roll over into the fields above them.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDateTime, DatePiece, TimePiece};
    ///
    /// let rolled = CalendarDateTime::from_fields(2015, 6, 26, 23, 59, 61);
    /// assert_eq!(rolled.day(), 27);
    /// assert_eq!(rolled.hour(), 0);
    /// assert_eq!(rolled.second(), 1);
    /// ```
    pub fn from_fields(year: i64, month: i64, day: i64,
                       hour: i64, minute: i64, second: i64) -> Self {
        Self::from_fields_ms(year, month, day, hour, minute, second, 0)
    }

    /// `from_fields`, with a millisecond field as well.
    pub fn from_fields_ms(year: i64, month: i64, day: i64,
                          hour: i64, minute: i64, second: i64, millisecond: i64) -> Self {
        let date = CalendarDate::from_fields(year, month, day);
        let wall = date.epoch_days() * MS_PER_DAY
            + ((hour * 60 + minute) * 60 + second) * 1_000
            + millisecond;
        Self::from_wall_ms(wall, FixedOffset::utc(), date.week_locale())
    }

    /// The current moment, according to the given clock, at the given
    /// offset.
    pub fn now<C: Clock>(clock: &C, offset: FixedOffset) -> Self {
        let wall = clock.now_ms() + offset.minutes() as i64 * 60_000;
        Self::from_wall_ms(wall, offset, WeekLocale::default())
    }

    /// Rebuilds a date-time from wall-clock milliseconds (the instant
    /// *plus* the offset), normalizing into date and time fields.
    pub(crate) fn from_wall_ms(wall: i64, offset: FixedOffset, locale: WeekLocale) -> Self {
        let (days, ms_of_day) = split_cycle(wall, MS_PER_DAY);
        Self {
            date: CalendarDate::from_epoch_days(days, locale),
            time: TimeOfDay::from_ms_of_day(ms_of_day),
            offset,
        }
    }

    /// Returns the date portion of this date-time.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the time portion of this date-time.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The fixed UTC offset these wall fields are written in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The offset as signed minutes east of UTC.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset.minutes()
    }

    /// Returns the same *wall* fields reinterpreted at another offset,
    /// which is a different instant, unless the offsets are equal.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }

    /// Returns this date-time with the given week-numbering locale
    /// attached to its date portion.
    pub fn with_week_locale(self, locale: WeekLocale) -> Self {
        Self { date: self.date.with_week_locale(locale), ..self }
    }

    /// This instant as milliseconds since the Unix epoch.
    pub fn stamp(&self) -> i64 {
        self.date.epoch_days() * MS_PER_DAY + self.time.ms_of_day()
            - self.offset.minutes() as i64 * 60_000
    }

    /// This instant with its fields read off at offset zero.
    pub fn utc(&self) -> UtcDateTime {
        UtcDateTime::from_stamp_in(self.stamp(), self.date.week_locale())
    }

    /// The given UTC instant, seen from the given offset.
    pub fn from_utc(utc: UtcDateTime, offset: FixedOffset) -> Self {
        let wall = utc.stamp() + offset.minutes() as i64 * 60_000;
        Self::from_wall_ms(wall, offset, utc.week_locale())
    }

    pub fn is_midnight(&self) -> bool {
        self.time == TimeOfDay::midnight()
    }

    /// The week number of the date portion, under its locale.
    pub fn week_of_year(&self) -> i64 {
        self.date.week_of_year()
    }

    /// Returns this date-time with a different year, the other fields
    /// rolling over as needed. The remaining `with_…` setters all work
    /// the same way: wall fields are rewritten and renormalized, and
    /// the offset stays put.
    pub fn with_year(self, year: i64) -> Self {
        Self { date: self.date.with_year(year), ..self }
    }

    pub fn with_month(self, month: Month) -> Self {
        Self { date: self.date.with_month(month), ..self }
    }

    pub fn with_day(self, day: i64) -> Self {
        Self { date: self.date.with_day(day), ..self }
    }

    pub fn with_hour(self, hour: i64) -> Self {
        self.rewrite_time(hour, self.time.minute as i64, self.time.second as i64,
                          self.time.millisecond as i64)
    }

    pub fn with_minute(self, minute: i64) -> Self {
        self.rewrite_time(self.time.hour as i64, minute, self.time.second as i64,
                          self.time.millisecond as i64)
    }

    pub fn with_second(self, second: i64) -> Self {
        self.rewrite_time(self.time.hour as i64, self.time.minute as i64, second,
                          self.time.millisecond as i64)
    }

    pub fn with_millisecond(self, millisecond: i64) -> Self {
        self.rewrite_time(self.time.hour as i64, self.time.minute as i64,
                          self.time.second as i64, millisecond)
    }

    fn rewrite_time(self, hour: i64, minute: i64, second: i64, millisecond: i64) -> Self {
        let wall = self.date.epoch_days() * MS_PER_DAY
            + ((hour * 60 + minute) * 60 + second) * 1_000
            + millisecond;
        Self::from_wall_ms(wall, self.offset, self.date.week_locale())
    }

    /// Returns the date-time `interval` away from this one.
    ///
    /// The year, month, and day fields move the wall date exactly as
    /// [`CalendarDate::add`] does, month-end clamping included, and
    /// the hour, minute, and second fields then shift the instant, each
    /// composing with the last.
    pub fn add(&self, interval: &Interval) -> Self {
        let mut out = *self;
        out.date = out.date.add(interval);

        let delta = (interval.hours * 60 + interval.minutes) * 60_000
            + (interval.seconds * 1_000.0).round() as i64;
        if delta != 0 {
            let wall = out.date.epoch_days() * MS_PER_DAY + out.time.ms_of_day() + delta;
            out = Self::from_wall_ms(wall, out.offset, out.date.week_locale());
        }

        out
    }
}

impl DatePiece for CalendarDateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for CalendarDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn millisecond(&self) -> i16 { self.time.millisecond }
}

// Date-times compare as instants: the offset is notation, not identity.

impl PartialEq for CalendarDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.stamp() == other.stamp()
    }
}

impl Eq for CalendarDateTime {
}

impl PartialOrd for CalendarDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stamp().cmp(&other.stamp())
    }
}


/// A **UTC date-time**: the same shape as [`CalendarDateTime`], but the
/// offset is zero by construction and every accessor reads the UTC
/// fields of the instant.
#[derive(Copy, Clone)]
pub struct UtcDateTime {
    inner: CalendarDateTime,
}

impl UtcDateTime {

    /// Creates a UTC date-time from a date and a time of day.
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { inner: CalendarDateTime::new(date, time) }
    }

    /// Creates a UTC date-time from raw numeric fields, with the month
    /// numbered from one and the usual rollover semantics.
    pub fn from_fields(year: i64, month: i64, day: i64,
                       hour: i64, minute: i64, second: i64) -> Self {
        Self { inner: CalendarDateTime::from_fields(year, month, day, hour, minute, second) }
    }

    /// The current moment, according to the given clock.
    pub fn now<C: Clock>(clock: &C) -> Self {
        Self::from_stamp(clock.now_ms())
    }

    /// The given count of milliseconds since the Unix epoch.
    pub fn from_stamp(stamp: i64) -> Self {
        Self::from_stamp_in(stamp, WeekLocale::default())
    }

    pub(crate) fn from_stamp_in(stamp: i64, locale: WeekLocale) -> Self {
        Self { inner: CalendarDateTime::from_wall_ms(stamp, FixedOffset::utc(), locale) }
    }

    pub fn date(&self) -> CalendarDate {
        self.inner.date()
    }

    pub fn time(&self) -> TimeOfDay {
        self.inner.time()
    }

    /// Always zero: that is the point of this type.
    pub fn utc_offset_minutes(&self) -> i32 {
        0
    }

    /// This instant as milliseconds since the Unix epoch.
    pub fn stamp(&self) -> i64 {
        self.inner.stamp()
    }

    pub(crate) fn week_locale(&self) -> WeekLocale {
        self.inner.date().week_locale()
    }

    pub fn is_midnight(&self) -> bool {
        self.inner.is_midnight()
    }

    pub fn week_of_year(&self) -> i64 {
        self.inner.week_of_year()
    }

    /// This instant, seen from the given offset as a local date-time.
    pub fn at_offset(self, offset: FixedOffset) -> CalendarDateTime {
        CalendarDateTime::from_utc(self, offset)
    }

    pub fn with_year(self, year: i64) -> Self {
        Self { inner: self.inner.with_year(year) }
    }

    pub fn with_month(self, month: Month) -> Self {
        Self { inner: self.inner.with_month(month) }
    }

    pub fn with_day(self, day: i64) -> Self {
        Self { inner: self.inner.with_day(day) }
    }

    pub fn with_hour(self, hour: i64) -> Self {
        Self { inner: self.inner.with_hour(hour) }
    }

    pub fn with_minute(self, minute: i64) -> Self {
        Self { inner: self.inner.with_minute(minute) }
    }

    pub fn with_second(self, second: i64) -> Self {
        Self { inner: self.inner.with_second(second) }
    }

    pub fn with_millisecond(self, millisecond: i64) -> Self {
        Self { inner: self.inner.with_millisecond(millisecond) }
    }

    /// Returns the UTC date-time `interval` away from this one.
    ///
    /// Years and months go through the calendar arithmetic, clamping
    /// at month ends; days, hours, minutes, and seconds collapse into a
    /// single millisecond delta on the instant. With the offset pinned
    /// to zero there is no local-midnight gap to correct for.
    pub fn add(&self, interval: &Interval) -> Self {
        let mut inner = self.inner;

        if interval.years != 0 || interval.months != 0 {
            let months_only = Interval::new(interval.years, interval.months, 0, 0, 0, 0.0);
            inner.date = inner.date.add(&months_only);
        }

        let delta = ((interval.days * 24 + interval.hours) * 60 + interval.minutes) * 60_000
            + (interval.seconds * 1_000.0).round() as i64;

        Self::from_stamp_in(inner.stamp() + delta, inner.date().week_locale())
    }
}

impl DatePiece for UtcDateTime {
    fn year(&self) -> i64 { self.inner.year() }
    fn month(&self) -> Month { self.inner.month() }
    fn day(&self) -> i8 { self.inner.day() }
    fn yearday(&self) -> i16 { self.inner.yearday() }
    fn weekday(&self) -> Weekday { self.inner.weekday() }
}

impl TimePiece for UtcDateTime {
    fn hour(&self) -> i8 { self.inner.hour() }
    fn minute(&self) -> i8 { self.inner.minute() }
    fn second(&self) -> i8 { self.inner.second() }
    fn millisecond(&self) -> i16 { self.inner.millisecond() }
}

impl PartialEq for UtcDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.stamp() == other.stamp()
    }
}

impl Eq for UtcDateTime {
}

impl PartialOrd for UtcDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UtcDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stamp().cmp(&other.stamp())
    }
}
