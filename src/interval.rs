//! Signed, calendar-relative lengths of time.
//!
//! An [`Interval`] is *not* a fixed number of milliseconds: “one month”
//! is twenty-eight days in February and thirty-one in March, so applying
//! an interval needs a date to apply it to. The fixed-length view is
//! available through `total_seconds`, but only for intervals that don’t
//! mention years or months.

use std::ops::{AddAssign, Mul, Neg};
use std::str::FromStr;


/// A single field of an [`Interval`], used by the one-field constructor.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Unit {
    Years, Months, Days, Hours, Minutes, Seconds,
}


/// A signed calendar delta: some number of years, months, days, hours,
/// minutes, and seconds, each field independently signed.
///
/// Only the seconds field may carry a fraction, so that ISO 8601
/// durations such as `PT0.5S` survive a round-trip.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Interval {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

/// The error returned when an interval is asked a question that only
/// makes sense for fixed-length intervals.
#[derive(PartialEq, Eq, Debug, Copy, Clone, thiserror::Error)]
pub enum IntervalError {

    /// `total_seconds` was called on an interval with a years or months
    /// field, which has no fixed length in seconds.
    #[error("interval with years or months has no fixed length in seconds")]
    CalendarUnits,
}

/// The error returned when a string is not an ISO 8601 duration.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ParseIntervalError {

    /// The input doesn’t follow the `PnYnMnDTnHnMnS` grammar.
    #[error("not an ISO 8601 duration: {0:?}")]
    Invalid(String),

    /// The grammar matched, but not a single field was given.
    #[error("ISO 8601 duration has no fields: {0:?}")]
    Empty(String),
}


impl Interval {

    /// Creates a new interval from all six fields.
    pub fn new(years: i64, months: i64, days: i64, hours: i64, minutes: i64, seconds: f64) -> Self {
        Self { years, months, days, hours, minutes, seconds }
    }

    /// Creates a new interval with the given field set to `amount` and
    /// every other field zero.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{Interval, Unit};
    ///
    /// assert_eq!(Interval::of(Unit::Days, 7), Interval::new(0, 0, 7, 0, 0, 0.0));
    /// ```
    pub fn of(unit: Unit, amount: i64) -> Self {
        let mut interval = Self::default();
        match unit {
            Unit::Years   => interval.years = amount,
            Unit::Months  => interval.months = amount,
            Unit::Days    => interval.days = amount,
            Unit::Hours   => interval.hours = amount,
            Unit::Minutes => interval.minutes = amount,
            Unit::Seconds => interval.seconds = amount as f64,
        }
        interval
    }

    /// Creates a new zero-length interval.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns whether every field is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
            && self.hours == 0 && self.minutes == 0 && self.seconds == 0.0
    }

    /// Returns this interval with every field multiplied by `n`.
    pub fn times(&self, n: i64) -> Self {
        Self {
            years:   self.years * n,
            months:  self.months * n,
            days:    self.days * n,
            hours:   self.hours * n,
            minutes: self.minutes * n,
            seconds: self.seconds * n as f64,
        }
    }

    /// Returns this interval with the sign of every field flipped.
    pub fn negated(&self) -> Self {
        self.times(-1)
    }

    /// Accumulates another interval into this one, field by field.
    pub fn add(&mut self, other: &Self) {
        self.years += other.years;
        self.months += other.months;
        self.days += other.days;
        self.hours += other.hours;
        self.minutes += other.minutes;
        self.seconds += other.seconds;
    }

    /// The fixed length of this interval in seconds.
    ///
    /// Only intervals without years and months have one; for anything
    /// else this returns `IntervalError::CalendarUnits`, because the
    /// answer would depend on which date the interval is applied to.
    pub fn total_seconds(&self) -> Result<f64, IntervalError> {
        if self.years != 0 || self.months != 0 {
            return Err(IntervalError::CalendarUnits);
        }

        Ok((((self.days * 24 + self.hours) * 60 + self.minutes) * 60) as f64 + self.seconds)
    }

    /// Renders this interval as an ISO 8601 duration, eliding fields
    /// that are zero. A zero interval renders as `PT0S`.
    ///
    /// Returns `None` when the fields mix strictly-positive and
    /// strictly-negative values, because the duration grammar has a
    /// single leading sign and cannot express such an interval.
    pub fn to_iso_string(&self) -> Option<String> {
        self.render_iso(false)
    }

    /// Renders this interval as an ISO 8601 duration with every field
    /// present, zero or not. Same sign restriction as `to_iso_string`.
    pub fn to_iso_string_verbose(&self) -> Option<String> {
        self.render_iso(true)
    }

    fn render_iso(&self, verbose: bool) -> Option<String> {
        use std::fmt::Write;

        let any_positive = self.years > 0 || self.months > 0 || self.days > 0
            || self.hours > 0 || self.minutes > 0 || self.seconds > 0.0;
        let any_negative = self.years < 0 || self.months < 0 || self.days < 0
            || self.hours < 0 || self.minutes < 0 || self.seconds < 0.0;

        if any_positive && any_negative {
            return None;
        }

        if !verbose && self.is_zero() {
            return Some("PT0S".into());
        }

        let mut out = String::new();
        if any_negative {
            out.push('-');
        }
        out.push('P');

        if self.years != 0 || verbose {
            let _ = write!(out, "{}Y", self.years.abs());
        }
        if self.months != 0 || verbose {
            let _ = write!(out, "{}M", self.months.abs());
        }
        if self.days != 0 || verbose {
            let _ = write!(out, "{}D", self.days.abs());
        }

        if self.hours != 0 || self.minutes != 0 || self.seconds != 0.0 || verbose {
            out.push('T');
            if self.hours != 0 || verbose {
                let _ = write!(out, "{}H", self.hours.abs());
            }
            if self.minutes != 0 || verbose {
                let _ = write!(out, "{}M", self.minutes.abs());
            }
            if self.seconds != 0.0 || verbose {
                let _ = write!(out, "{}S", self.seconds.abs());
            }
        }

        Some(out)
    }

    /// Parses an ISO 8601 duration of the form
    /// `(-)?P(nY)?(nM)?(nD)?(T(nH)?(nM)?(n(.n)?S)?)?`.
    ///
    /// A leading minus negates every field. At least one field must be
    /// present, and a `T` with nothing after it is rejected.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::Interval;
    ///
    /// let interval = Interval::from_iso_string("P1Y2M3DT4H5M6S").unwrap();
    /// assert_eq!(interval, Interval::new(1, 2, 3, 4, 5, 6.0));
    /// ```
    pub fn from_iso_string(input: &str) -> Result<Self, ParseIntervalError> {
        let invalid = || ParseIntervalError::Invalid(input.into());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let mut rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        let mut interval = Self::default();
        let mut date_fields = 0;

        // Each field is a digit run followed by its designator letter. A
        // digit run followed by some *later* designator is left alone for
        // a later pass; anything left unconsumed at the end is an error,
        // which is what rejects out-of-order and unknown designators.
        for designator in ['Y', 'M', 'D'] {
            if let Some((value, after)) = lead_integer(rest) {
                if let Some(r) = after.strip_prefix(designator) {
                    match designator {
                        'Y' => interval.years = value,
                        'M' => interval.months = value,
                        _   => interval.days = value,
                    }
                    date_fields += 1;
                    rest = r;
                }
            }
        }

        let mut time_fields = 0;
        let has_time_part = rest.starts_with('T');

        if has_time_part {
            rest = &rest[1..];

            for designator in ['H', 'M'] {
                if let Some((value, after)) = lead_integer(rest) {
                    if let Some(r) = after.strip_prefix(designator) {
                        match designator {
                            'H' => interval.hours = value,
                            _   => interval.minutes = value,
                        }
                        time_fields += 1;
                        rest = r;
                    }
                }
            }

            if let Some((value, after)) = lead_decimal(rest) {
                if let Some(r) = after.strip_prefix('S') {
                    interval.seconds = value;
                    time_fields += 1;
                    rest = r;
                }
            }
        }

        if !rest.is_empty() {
            return Err(invalid());
        }
        if date_fields == 0 && time_fields == 0 {
            return Err(ParseIntervalError::Empty(input.into()));
        }
        if has_time_part && time_fields == 0 {
            return Err(ParseIntervalError::Empty(input.into()));
        }

        if negative {
            interval = interval.negated();
        }
        Ok(interval)
    }
}


/// Splits a leading run of digits off the front of the input.
fn lead_integer(input: &str) -> Option<(i64, &str)> {
    let end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let value = input[..end].parse().ok()?;
    Some((value, &input[end..]))
}

/// Splits a leading `n` or `n.n` off the front of the input.
fn lead_decimal(input: &str) -> Option<(f64, &str)> {
    let mut end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    if input[end..].starts_with('.') {
        let frac = &input[end + 1..];
        let frac_end = frac.find(|c: char| !c.is_ascii_digit()).unwrap_or(frac.len());
        if frac_end == 0 {
            return None;
        }
        end += 1 + frac_end;
    }
    let value = input[..end].parse().ok()?;
    Some((value, &input[end..]))
}


impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_iso_string(input)
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<i64> for Interval {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        self.times(amount)
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, other: Self) {
        self.add(&other);
    }
}
