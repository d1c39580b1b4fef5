#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [calendar dates](https://crates.io/crates/caldate),
//! date-times, intervals, and date ranges, with ISO 8601 parsing and
//! formatting.
//!
//! # Examples
//!
//! ```
//! use caldate::{CalendarDate, DateRange, DatePiece, Interval, IsoStyle, Month, Unit};
//!
//! let date: CalendarDate = "2015-06-26".parse().unwrap();
//! assert_eq!(date, CalendarDate::new(2015, Month::June, 26));
//!
//! let clamped = CalendarDate::new(2024, Month::January, 31)
//!     .add(&Interval::of(Unit::Months, 1));
//! assert_eq!(clamped.to_iso_string(IsoStyle::Extended), "2024-02-29");
//!
//! let week = DateRange::this_week(date);
//! assert_eq!(week.start_date().iso_weekday(), 0);
//! assert_eq!(week.iter().count(), 7);
//! ```
//!
//! Anything that needs the current moment takes a [`Clock`], so tests
//! can pin time down:
//!
//! ```
//! use caldate::{CalendarDate, FixedClock, FixedOffset};
//!
//! let clock = FixedClock(1_234_567_890_000);
//! let today = CalendarDate::today(&clock, FixedOffset::utc());
//! assert_eq!(today.to_string(), "2009-02-13");
//! ```

mod system;
mod util;

pub mod cal;
pub mod clock;
pub mod interval;
pub mod range;

#[cfg(feature = "serde")]
mod serde_support;

pub use crate::cal::{
    days_in_month, is_leap_year, is_long_iso_year, parse_date, parse_datetime,
    parse_utc_datetime, week_number, CalendarDate, CalendarDateTime, DatePiece,
    Error, FixedOffset, IsoStyle, Month, OffsetError, ParseError, TimeOfDay,
    TimePiece, UtcDateTime, Weekday, WeekLocale,
};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::interval::{Interval, IntervalError, ParseIntervalError, Unit};
pub use crate::range::{DateRange, Days, RangeError, StandardRange};
