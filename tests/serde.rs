#![cfg(feature = "serde")]

use caldate::{CalendarDate, CalendarDateTime, Interval, Month, UtcDateTime};


#[test]
fn dates_are_iso_strings() {
    let date = CalendarDate::new(2015, Month::June, 26);
    assert_eq!(serde_json::to_string(&date).unwrap(), "\"2015-06-26\"");

    let back: CalendarDate = serde_json::from_str("\"2015-06-26\"").unwrap();
    assert_eq!(back, date);
}

#[test]
fn datetimes_carry_their_zone() {
    let dt = CalendarDateTime::from_fields(2015, 6, 26, 22, 57, 9);
    assert_eq!(serde_json::to_string(&dt).unwrap(), "\"2015-06-26 22:57:09Z\"");
}

#[test]
fn utc_datetimes_are_rfc3339() {
    let utc = UtcDateTime::from_fields(2015, 6, 26, 22, 57, 9);
    let rendered = serde_json::to_string(&utc).unwrap();
    assert_eq!(rendered, "\"2015-06-26T22:57:09.000Z\"");

    let back: UtcDateTime = serde_json::from_str(&rendered).unwrap();
    assert_eq!(back, utc);
}

#[test]
fn intervals_are_durations() {
    let interval: Interval = "P1Y2M3DT4H5M6S".parse().unwrap();
    let rendered = serde_json::to_string(&interval).unwrap();
    assert_eq!(rendered, "\"P1Y2M3DT4H5M6S\"");

    let back: Interval = serde_json::from_str(&rendered).unwrap();
    assert_eq!(back, interval);
}

#[test]
fn mixed_sign_intervals_refuse_to_serialize() {
    let mixed = Interval::new(1, 0, -1, 0, 0, 0.0);
    assert!(serde_json::to_string(&mixed).is_err());
}

#[test]
fn bad_strings_fail_to_deserialize() {
    assert!(serde_json::from_str::<CalendarDate>("\"junk\"").is_err());
    assert!(serde_json::from_str::<CalendarDate>("42").is_err());
    assert!(serde_json::from_str::<Interval>("\"P\"").is_err());
}
