//! Optional serde support, behind the `serde` feature.
//!
//! Everything serializes as its ISO 8601 string form and deserializes
//! back through the same parsers the rest of the crate uses, so a value
//! that round-trips through serde is exactly the value the string
//! parser would have produced.

use std::fmt;

use serde::de::{Error as DeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cal::{CalendarDate, CalendarDateTime, IsoStyle, UtcDateTime};
use crate::interval::Interval;


impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string(IsoStyle::Extended))
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(StrVisitor {
            expecting: "an ISO 8601 date string",
            parse: |input| input.parse().map_err(|_| ()),
        })
    }
}


impl Serialize for CalendarDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string(IsoStyle::Extended, true))
    }
}

impl<'de> Deserialize<'de> for CalendarDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(StrVisitor {
            expecting: "an ISO 8601 date-time string",
            parse: |input| input.parse().map_err(|_| ()),
        })
    }
}


impl Serialize for UtcDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_utc_rfc3339_string(true))
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(StrVisitor {
            expecting: "an RFC 3339 timestamp string",
            parse: |input| input.parse().map_err(|_| ()),
        })
    }
}


impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_iso_string() {
            Some(rendered) => serializer.serialize_str(&rendered),
            None => Err(serde::ser::Error::custom(
                "interval mixes positive and negative fields, which ISO 8601 cannot express")),
        }
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(StrVisitor {
            expecting: "an ISO 8601 duration string",
            parse: |input| input.parse().map_err(|_| ()),
        })
    }
}


/// One visitor for all four types: a `&str` plus the type’s own parser.
struct StrVisitor<T> {
    expecting: &'static str,
    parse: fn(&str) -> Result<T, ()>,
}

impl<T> Visitor<'_> for StrVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E: DeError>(self, input: &str) -> Result<T, E> {
        (self.parse)(input)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(input), &self))
    }
}
