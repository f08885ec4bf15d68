//! Absolute timestamp type.

use crate::error::Error;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Naive formats accepted for time strings; naive values are taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Canonical rendering, UTC with millisecond precision.
const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// An absolute point in time.
///
/// Accepts RFC 3339 strings, `YYYY-MM-DD HH:MM:SS[.fff]` with a space or
/// `T` separator (interpreted as UTC), and bare `YYYY-MM-DD` dates. The
/// canonical textual form is `"YYYY-MM-DD HH:MM:SS.mmm"`, which is itself
/// an accepted input, so serialization round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Construct from an already-resolved instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The carried instant.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

fn parse_literal(input: &str) -> Result<Timestamp, String> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Timestamp(instant.with_timezone(&Utc)));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Timestamp(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Timestamp(date.and_time(NaiveTime::MIN).and_utc()));
    }

    Err(format!(
        "unrecognized time string '{}', expected RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD'",
        input
    ))
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_literal(s).map_err(Error::Validation)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_literal(&raw).map_err(serde::de::Error::custom)
    }
}
