//! Calendar days, and the arithmetic that moves between them.

use std::cmp::Ordering;

use crate::cal::math::{
    civil_from_days, days_from_civil, days_in_month, is_leap_year, week_number,
    weekday_from_days, Month, Weekday, MS_PER_DAY,
};
use crate::cal::offset::FixedOffset;
use crate::cal::{DatePiece, WeekLocale};
use crate::clock::Clock;
use crate::interval::Interval;

const MS_PER_HOUR: i64 = 3_600_000;


/// A **calendar date** is a day-long span on the timeline: a year, a
/// month, and a day of the month, plus the locale’s week-numbering
/// settings.
///
/// Raw numeric construction never fails. Out-of-range fields roll over
/// the way a wall calendar does (month thirteen is January of the next
/// year, the 32nd of January is the 1st of February), so every value of
/// this type is a real day. Years below 100 mean exactly what they say:
/// year 26 is the first century, not 1926.
///
/// All the mutating operations return a new date and leave the receiver
/// alone.
#[derive(Copy, Clone)]
pub struct CalendarDate {
    year:   i64,
    month:  Month,
    day:    i8,
    locale: WeekLocale,
}

impl CalendarDate {

    /// Creates a date from a year, a month, and a day of the month,
    /// rolling an out-of-range day over into the months that follow.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDate, DatePiece, Month};
    ///
    /// let date = CalendarDate::new(1969, Month::July, 20);
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.day(), 20);
    ///
    /// let rolled = CalendarDate::new(2023, Month::February, 29);
    /// assert_eq!(rolled.month(), Month::March);
    /// assert_eq!(rolled.day(), 1);
    /// ```
    pub fn new(year: i64, month: Month, day: i8) -> Self {
        Self::from_parts(year, month, day as i64, WeekLocale::default())
    }

    /// Creates a date from raw numeric fields, with the month numbered
    /// from one. Both the month and the day may be far out of range, or
    /// zero or negative; whatever they are, they roll over into a real
    /// date.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDate, DatePiece, Month};
    ///
    /// let date = CalendarDate::from_fields(2015, 13, 1);
    /// assert_eq!(date.year(), 2016);
    /// assert_eq!(date.month(), Month::January);
    /// ```
    pub fn from_fields(year: i64, month: i64, day: i64) -> Self {
        let total_months = year * 12 + (month - 1);
        let year = total_months.div_euclid(12);

        // In range by the rem_euclid, so the unwrap cannot fire.
        let month = Month::from_zero(total_months.rem_euclid(12) as i8).unwrap();
        Self::from_parts(year, month, day, WeekLocale::default())
    }

    /// Today, according to the given clock, seen from the given offset.
    /// The time of day is discarded.
    pub fn today<C: Clock>(clock: &C, offset: FixedOffset) -> Self {
        let wall = clock.now_ms() + offset.minutes() as i64 * 60_000;
        let (year, month, day) = civil_from_days(wall.div_euclid(MS_PER_DAY));
        Self { year, month, day, locale: WeekLocale::default() }
    }

    /// Returns this date with the given week-numbering locale attached.
    /// The locale affects `week_of_year` and nothing else; in particular
    /// two dates with different locales still compare equal.
    pub fn with_week_locale(self, locale: WeekLocale) -> Self {
        Self { locale, ..self }
    }

    /// Normalizes a (possibly out-of-range) day-of-month against the
    /// calendar by passing it through the epoch-day bridge.
    fn from_parts(year: i64, month: Month, day: i64, locale: WeekLocale) -> Self {
        let (year, month, day) = civil_from_days(days_from_civil(year, month, day));
        Self { year, month, day, locale }
    }

    /// Rebuilds a date from a count of days since the epoch, keeping the
    /// locale.
    pub(crate) fn from_epoch_days(days: i64, locale: WeekLocale) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day, locale }
    }

    /// The number of days between this date and the 1st of January 1970.
    pub(crate) fn epoch_days(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day as i64)
    }

    pub(crate) fn week_locale(&self) -> WeekLocale {
        self.locale
    }

    /// Returns this date with a different year. A 29th of February
    /// rolls over when the target year isn’t a leap year.
    pub fn with_year(self, year: i64) -> Self {
        Self::from_parts(year, self.month, self.day as i64, self.locale)
    }

    /// Returns this date with a different month, rolling the day over if
    /// the new month is too short for it.
    pub fn with_month(self, month: Month) -> Self {
        Self::from_parts(self.year, month, self.day as i64, self.locale)
    }

    /// Returns this date with a different day of the month, however far
    /// out of range.
    pub fn with_day(self, day: i64) -> Self {
        Self::from_parts(self.year, self.month, day, self.locale)
    }

    /// The week number of this date under its locale’s settings. With
    /// the default locale, this is the ISO 8601 week number, 1 to 53.
    pub fn week_of_year(&self) -> i64 {
        week_number(self.year, self.month, self.day, self.locale)
    }

    /// This date as the integer you get by writing it as `YYYYMMDD` and
    /// dropping the separators. Preserves ordering, which is what the
    /// range iterator uses it for.
    pub fn compact_int(&self) -> i64 {
        self.year * 10_000 + (self.month.months_from_january() as i64 + 1) * 100 + self.day as i64
    }

    /// Returns the date `interval` away from this one.
    ///
    /// The year and month fields move the date through the calendar, and
    /// a day-of-month beyond the end of the target month is *clamped* to
    /// its last day rather than rolled over: the 31st of January plus one
    /// month is the 28th (or 29th) of February, never the 3rd of March.
    /// The day field then steps in whole days. Time-of-day fields are
    /// ignored here; a date has no time to apply them to.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDate, DatePiece, Interval, Month, Unit};
    ///
    /// let date = CalendarDate::new(2024, Month::January, 31);
    /// let next = date.add(&Interval::of(Unit::Months, 1));
    /// assert_eq!(next.month(), Month::February);
    /// assert_eq!(next.day(), 29);
    /// ```
    pub fn add(&self, interval: &Interval) -> Self {
        let mut date = *self;

        if interval.years != 0 || interval.months != 0 {
            let total = date.month.months_from_january() as i64
                + interval.months
                + interval.years * 12;

            let year = date.year + total.div_euclid(12);

            // In range by the rem_euclid, so the unwrap cannot fire.
            let month = Month::from_zero(total.rem_euclid(12) as i8).unwrap();
            let day = date.day.min(days_in_month(year, month));
            date = Self { year, month, day, locale: date.locale };
        }

        if interval.days != 0 {
            // Step at local noon in millisecond space, so that an hour of
            // daylight-saving skew cannot change the day count.
            let noon = date.epoch_days() * MS_PER_DAY + MS_PER_DAY / 2;
            let landed = noon + interval.days * MS_PER_DAY;

            let expected = civil_from_days(landed.div_euclid(MS_PER_DAY)).2;
            let fixed = fix_day_gap(landed - MS_PER_DAY / 2, expected, |_| 0);
            date = Self::from_epoch_days(fixed.div_euclid(MS_PER_DAY), date.locale);
        }

        date
    }
}

impl DatePiece for CalendarDate {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }

    fn yearday(&self) -> i16 {
        self.month.days_before_start()
            + if is_leap_year(self.year) && self.month >= Month::March { 1 } else { 0 }
            + self.day as i16
    }

    fn weekday(&self) -> Weekday {
        weekday_from_days(self.epoch_days())
    }
}

// The locale settings are bookkeeping, not identity: comparisons look at
// the calendar day alone.

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }
}

impl Eq for CalendarDate {
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}


/// Checks that an instant still falls on the day a date-setting
/// operation was aiming for, and nudges it by one hour toward that day
/// when it doesn’t.
///
/// The mismatch can only happen when the offset in force shifts under
/// the instant, that is, when a daylight-saving gap swallows the local
/// midnight, which is why the offset lookup is a parameter: the fixed offsets this
/// crate ships never move, making the check a no-op for them, but the
/// correction is kept at exactly one hour rather than being generalized
/// to transitions of other sizes.
pub(crate) fn fix_day_gap(stamp: i64, expected_day: i8, offset_at: impl Fn(i64) -> i64) -> i64 {
    let day_at = |ms: i64| {
        let wall = ms + offset_at(ms) * 60_000;
        civil_from_days(wall.div_euclid(MS_PER_DAY)).2
    };

    if day_at(stamp) == expected_day {
        return stamp;
    }

    let forward = stamp + MS_PER_HOUR;
    if day_at(forward) == expected_day {
        forward
    }
    else {
        stamp - MS_PER_HOUR
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::FixedClock;
    use crate::interval::Unit;

    #[test]
    fn rollover_construction() {
        assert_eq!(CalendarDate::from_fields(2015, 13, 1),
                   CalendarDate::new(2016, Month::January, 1));
        assert_eq!(CalendarDate::from_fields(2015, 1, 32),
                   CalendarDate::new(2015, Month::February, 1));
        assert_eq!(CalendarDate::from_fields(2015, 0, 1),
                   CalendarDate::new(2014, Month::December, 1));
        assert_eq!(CalendarDate::from_fields(2015, 3, 0),
                   CalendarDate::new(2015, Month::February, 28));
    }

    #[test]
    fn small_years_stay_small() {
        let date = CalendarDate::from_fields(26, 1, 1);
        assert_eq!(date.year(), 26);

        let copied = date;
        assert_eq!(copied.year(), 26);
    }

    #[test]
    fn month_end_clamping() {
        let jan31 = CalendarDate::new(2024, Month::January, 31);
        assert_eq!(jan31.add(&Interval::of(Unit::Months, 1)),
                   CalendarDate::new(2024, Month::February, 29));

        let jan31 = CalendarDate::new(2023, Month::January, 31);
        assert_eq!(jan31.add(&Interval::of(Unit::Months, 1)),
                   CalendarDate::new(2023, Month::February, 28));
    }

    #[test]
    fn month_arithmetic_crosses_years() {
        let date = CalendarDate::new(2020, Month::November, 15);
        assert_eq!(date.add(&Interval::of(Unit::Months, 14)),
                   CalendarDate::new(2022, Month::January, 15));
        assert_eq!(date.add(&Interval::of(Unit::Months, -23)),
                   CalendarDate::new(2018, Month::December, 15));
    }

    #[test]
    fn day_arithmetic() {
        let date = CalendarDate::new(2024, Month::February, 28);
        assert_eq!(date.add(&Interval::of(Unit::Days, 2)),
                   CalendarDate::new(2024, Month::March, 1));
        assert_eq!(date.add(&Interval::of(Unit::Days, -59)),
                   CalendarDate::new(2023, Month::December, 31));
    }

    #[test]
    fn combined_interval() {
        // Years and months apply (with clamping) before days do.
        let date = CalendarDate::new(2023, Month::December, 31);
        let moved = date.add(&Interval::new(0, 2, 1, 0, 0, 0.0));
        assert_eq!(moved, CalendarDate::new(2024, Month::March, 1));
    }

    #[test]
    fn today_from_a_pinned_clock() {
        // 2024-06-01T00:30:00Z.
        let clock = FixedClock(1_717_201_800_000);
        assert_eq!(CalendarDate::today(&clock, FixedOffset::utc()),
                   CalendarDate::new(2024, Month::June, 1));

        // Half an hour after midnight UTC is still yesterday in Chicago.
        let chicago = FixedOffset::from_minutes(-300).unwrap();
        assert_eq!(CalendarDate::today(&clock, chicago),
                   CalendarDate::new(2024, Month::May, 31));
    }

    #[test]
    fn weekdays_and_yeardays() {
        let date = CalendarDate::new(2024, Month::March, 1);
        assert_eq!(date.weekday(), Weekday::Friday);
        assert_eq!(date.iso_weekday(), 4);
        assert_eq!(date.yearday(), 61);

        let date = CalendarDate::new(2023, Month::March, 1);
        assert_eq!(date.yearday(), 60);
    }

    #[test]
    fn ordering_and_equality_agree() {
        let a = CalendarDate::new(2024, Month::May, 5);
        let b = CalendarDate::new(2024, Month::May, 6);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.cmp(&b).reverse(), b.cmp(&a));
        assert!(a == a && a.cmp(&a) == Ordering::Equal);
    }

    #[test]
    fn locales_are_not_identity() {
        let iso = CalendarDate::new(2024, Month::May, 5);
        let sunday_first = iso.with_week_locale(WeekLocale {
            first_day_of_week: Weekday::Sunday,
            cutoff_weekday: Weekday::Thursday,
        });
        assert_eq!(iso, sunday_first);
    }

    mod day_gaps {
        use super::*;

        // A pretend zone that springs forward by an hour at a fixed
        // instant, like a daylight-saving transition does.
        const SPRING_FORWARD_AT: i64 = 1_000 * MS_PER_DAY;

        fn springy(ms: i64) -> i64 {
            if ms >= SPRING_FORWARD_AT { 60 } else { 0 }
        }

        #[test]
        fn no_gap_no_change() {
            let stamp = 500 * MS_PER_DAY;
            let expected = civil_from_days(500).2;
            assert_eq!(fix_day_gap(stamp, expected, springy), stamp);
        }

        #[test]
        fn gap_nudges_forward() {
            // One hour before the transition, aiming for the day the
            // transition starts: the extra hour pushes us over.
            let stamp = SPRING_FORWARD_AT - MS_PER_HOUR;
            let expected = civil_from_days(999).2;
            assert_eq!(fix_day_gap(stamp, expected, springy), stamp);

            let aimed_at_next_day = civil_from_days(1_000).2;
            let fixed = fix_day_gap(stamp, aimed_at_next_day, springy);
            assert_eq!(fixed, stamp + MS_PER_HOUR);
        }
    }
}
