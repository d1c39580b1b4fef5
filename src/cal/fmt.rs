//! Rendering dates and times as strings: the two ISO 8601 forms, the
//! RFC 3339 UTC instant, and the US 12-hour clock.

use std::fmt;

use crate::cal::date::CalendarDate;
use crate::cal::datetime::{CalendarDateTime, TimeOfDay, UtcDateTime};
use crate::cal::{DatePiece, TimePiece};
use crate::util::RangeExt;


/// The two ISO 8601 punctuation styles: **compact** (`YYYYMMDD`,
/// `YYYYMMDD'T'HHMMSS`) and **extended** (`YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS`). Same information either way.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum IsoStyle {
    Compact,
    Extended,
}


/// Four digits for the years that fit in four digits, an explicit sign
/// and five digits otherwise.
fn push_year(out: &mut String, year: i64) {
    use std::fmt::Write;

    if year.is_within(0..10_000) {
        let _ = write!(out, "{:04}", year);
    }
    else {
        let _ = write!(out, "{:+05}", year);
    }
}

fn push_date<D: DatePiece>(out: &mut String, date: &D, style: IsoStyle) {
    use std::fmt::Write;

    push_year(out, date.year());
    let separator = if style == IsoStyle::Extended { "-" } else { "" };
    let _ = write!(out, "{}{:02}{}{:02}",
                   separator, date.month().months_from_january() + 1,
                   separator, date.day());
}

fn push_time<T: TimePiece>(out: &mut String, time: &T, style: IsoStyle) {
    use std::fmt::Write;

    let separator = if style == IsoStyle::Extended { ":" } else { "" };
    let _ = write!(out, "{:02}{}{:02}{}{:02}",
                   time.hour(), separator, time.minute(), separator, time.second());
}


impl CalendarDate {

    /// This date in the given ISO 8601 form: `YYYYMMDD` or `YYYY-MM-DD`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDate, IsoStyle, Month};
    ///
    /// let date = CalendarDate::new(2015, Month::September, 13);
    /// assert_eq!(date.to_iso_string(IsoStyle::Compact), "20150913");
    /// assert_eq!(date.to_iso_string(IsoStyle::Extended), "2015-09-13");
    /// ```
    pub fn to_iso_string(&self, style: IsoStyle) -> String {
        let mut out = String::with_capacity(10);
        push_date(&mut out, self, style);
        out
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string(IsoStyle::Extended))
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self)
    }
}


impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}",
               self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self)
    }
}


impl CalendarDateTime {

    /// The time portion as `HH:MM:SS`.
    pub fn to_iso_time_string(&self) -> String {
        let mut out = String::with_capacity(8);
        push_time(&mut out, self, IsoStyle::Extended);
        out
    }

    /// The time portion on the US 12-hour clock, like `2:30 PM`.
    ///
    /// With `omit_zero_minutes`, a whole hour loses its `:00`. Without
    /// `show_ampm` the marker is dropped and midnight stays an `0`
    /// rather than becoming a `12`.
    pub fn to_us_time_string(&self, show_ampm: bool, omit_zero_minutes: bool) -> String {
        use std::fmt::Write;

        let mut hour = self.hour();
        let mut is_pm = hour == 12;
        if hour > 12 {
            hour -= 12;
            is_pm = true;
        }
        if hour == 0 && show_ampm {
            hour = 12;
        }

        let mut out = format!("{}", hour);
        if !omit_zero_minutes || self.minute() > 0 {
            let _ = write!(out, ":{:02}", self.minute());
        }
        if show_ampm {
            out.push_str(if is_pm { " PM" } else { " AM" });
        }
        out
    }

    /// This date-time’s wall fields in the given ISO 8601 form, with
    /// the offset suffix (`Z` or `±HH:MM`) if `with_zone` is set.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::{CalendarDateTime, IsoStyle};
    ///
    /// let dt = CalendarDateTime::from_fields(2015, 9, 13, 20, 24, 5);
    /// assert_eq!(dt.to_iso_string(IsoStyle::Compact, false), "20150913T202405");
    /// assert_eq!(dt.to_iso_string(IsoStyle::Extended, true), "2015-09-13 20:24:05Z");
    /// ```
    pub fn to_iso_string(&self, style: IsoStyle, with_zone: bool) -> String {
        let mut out = String::with_capacity(26);
        push_date(&mut out, self, style);
        out.push(if style == IsoStyle::Extended { ' ' } else { 'T' });
        push_time(&mut out, self, style);
        if with_zone {
            out.push_str(&self.offset().suffix());
        }
        out
    }

    /// Like `to_iso_string`, but rendering the UTC fields of the
    /// instant; the zone suffix, if asked for, is therefore always `Z`.
    pub fn to_utc_iso_string(&self, style: IsoStyle, with_zone: bool) -> String {
        self.utc().to_iso_string(style, with_zone)
    }

    /// This instant as an RFC 3339 timestamp: the extended UTC form
    /// with a `T` separator and a literal `Z`, with the milliseconds
    /// kept or dropped as asked.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caldate::CalendarDateTime;
    ///
    /// let dt = CalendarDateTime::from_fields_ms(2015, 9, 13, 20, 24, 5, 250);
    /// assert_eq!(dt.to_utc_rfc3339_string(true), "2015-09-13T20:24:05.250Z");
    /// assert_eq!(dt.to_utc_rfc3339_string(false), "2015-09-13T20:24:05Z");
    /// ```
    pub fn to_utc_rfc3339_string(&self, with_millis: bool) -> String {
        use std::fmt::Write;

        let utc = self.utc();
        let mut out = String::with_capacity(24);
        push_date(&mut out, &utc, IsoStyle::Extended);
        out.push('T');
        push_time(&mut out, &utc, IsoStyle::Extended);
        if with_millis {
            let _ = write!(out, ".{:03}", utc.millisecond());
        }
        out.push('Z');
        out
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string(IsoStyle::Extended, true))
    }
}

impl fmt::Debug for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDateTime({})", self)
    }
}


impl UtcDateTime {

    /// The time portion as `HH:MM:SS`.
    pub fn to_iso_time_string(&self) -> String {
        let mut out = String::with_capacity(8);
        push_time(&mut out, self, IsoStyle::Extended);
        out
    }

    /// The time portion on the US 12-hour clock; see
    /// [`CalendarDateTime::to_us_time_string`].
    pub fn to_us_time_string(&self, show_ampm: bool, omit_zero_minutes: bool) -> String {
        self.at_offset(crate::cal::offset::FixedOffset::utc())
            .to_us_time_string(show_ampm, omit_zero_minutes)
    }

    /// This date-time in the given ISO 8601 form, with a `Z` suffix if
    /// `with_zone` is set.
    pub fn to_iso_string(&self, style: IsoStyle, with_zone: bool) -> String {
        let mut out = String::with_capacity(26);
        push_date(&mut out, self, style);
        out.push(if style == IsoStyle::Extended { ' ' } else { 'T' });
        push_time(&mut out, self, style);
        if with_zone {
            out.push('Z');
        }
        out
    }

    /// This instant as an RFC 3339 timestamp; see
    /// [`CalendarDateTime::to_utc_rfc3339_string`].
    pub fn to_utc_rfc3339_string(&self, with_millis: bool) -> String {
        use std::fmt::Write;

        let mut out = String::with_capacity(24);
        push_date(&mut out, self, IsoStyle::Extended);
        out.push('T');
        push_time(&mut out, self, IsoStyle::Extended);
        if with_millis {
            let _ = write!(out, ".{:03}", self.millisecond());
        }
        out.push('Z');
        out
    }
}

impl fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utc_rfc3339_string(true))
    }
}

impl fmt::Debug for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UtcDateTime({})", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::Month;

    #[test]
    fn dates() {
        let date = CalendarDate::new(1600, Month::February, 28);
        assert_eq!(date.to_iso_string(IsoStyle::Extended), "1600-02-28");
        assert_eq!(date.to_iso_string(IsoStyle::Compact), "16000228");
    }

    #[test]
    fn ancient_and_distant_years() {
        let date = CalendarDate::new(-753, Month::December, 1);
        assert_eq!(date.to_iso_string(IsoStyle::Extended), "-0753-12-01");

        let date = CalendarDate::new(10601, Month::January, 31);
        assert_eq!(date.to_iso_string(IsoStyle::Extended), "+10601-01-31");
    }

    #[test]
    fn debugging() {
        let date = CalendarDate::new(1600, Month::February, 28);
        assert_eq!(format!("{:?}", date), "CalendarDate(1600-02-28)");

        let then = CalendarDateTime::from_fields(2009, 2, 13, 23, 31, 30);
        assert_eq!(format!("{:?}", then), "CalendarDateTime(2009-02-13 23:31:30Z)");
    }

    #[test]
    fn datetimes_with_zones() {
        use crate::cal::offset::FixedOffset;

        let utc = CalendarDateTime::from_fields(2009, 2, 13, 23, 31, 30);
        assert_eq!(utc.to_iso_string(IsoStyle::Extended, true), "2009-02-13 23:31:30Z");

        let plus = utc.with_offset(FixedOffset::from_minutes(90).unwrap());
        assert_eq!(plus.to_iso_string(IsoStyle::Extended, true), "2009-02-13 23:31:30+01:30");
        assert_eq!(plus.to_iso_string(IsoStyle::Compact, false), "20090213T233130");
    }

    #[test]
    fn utc_view_of_an_offset_datetime() {
        use crate::cal::offset::FixedOffset;

        let wall = CalendarDateTime::from_fields(2009, 2, 13, 23, 31, 30)
            .with_offset(FixedOffset::from_minutes(-120).unwrap());
        assert_eq!(wall.to_utc_iso_string(IsoStyle::Extended, true), "2009-02-14 01:31:30Z");
    }

    #[test]
    fn us_time() {
        let dt = CalendarDateTime::from_fields(2015, 6, 26, 14, 30, 0);
        assert_eq!(dt.to_us_time_string(true, false), "2:30 PM");
        assert_eq!(dt.to_us_time_string(false, false), "2:30");

        let noon = CalendarDateTime::from_fields(2015, 6, 26, 12, 0, 0);
        assert_eq!(noon.to_us_time_string(true, true), "12 PM");
        assert_eq!(noon.to_us_time_string(true, false), "12:00 PM");

        let midnight = CalendarDateTime::from_fields(2015, 6, 26, 0, 0, 0);
        assert_eq!(midnight.to_us_time_string(true, true), "12 AM");
        assert_eq!(midnight.to_us_time_string(false, true), "0");
    }

    #[test]
    fn rfc3339() {
        let utc = UtcDateTime::from_fields(2015, 6, 26, 22, 57, 9);
        assert_eq!(utc.to_utc_rfc3339_string(false), "2015-06-26T22:57:09Z");
        assert_eq!(utc.to_utc_rfc3339_string(true), "2015-06-26T22:57:09.000Z");
    }

    #[test]
    fn time_of_day_display() {
        use crate::cal::datetime::TimeOfDay;

        let time = TimeOfDay::hms(12, 0, 0).unwrap();
        assert_eq!(format!("{}", time), "12:00:00.000");
        assert_eq!(format!("{:?}", time), "TimeOfDay(12:00:00.000)");
    }
}
