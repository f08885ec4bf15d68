//! Angle scalar type.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Recognized angular units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Degrees.
    Deg,
    /// Radians.
    Rad,
    /// Arcminutes.
    Arcmin,
    /// Arcseconds.
    Arcsec,
    /// Milliarcseconds.
    Mas,
}

impl AngleUnit {
    /// Resolve a unit symbol to an angular unit.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            "arcmin" => Some(Self::Arcmin),
            "arcsec" => Some(Self::Arcsec),
            "mas" => Some(Self::Mas),
            _ => None,
        }
    }

    /// Canonical unit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Arcmin => "arcmin",
            Self::Arcsec => "arcsec",
            Self::Mas => "mas",
        }
    }
}

/// An angle as a scalar value with an angular unit.
///
/// Parsed from literals of the form `"2.5 deg"`. The canonical textual form
/// is `"<value> <unit>"`, which is also how the type serializes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    /// Construct an angle from a value and a typed unit.
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// Scalar value in the carried unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The carried unit.
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }
}

fn parse_literal(input: &str) -> Result<Angle, String> {
    let (value, symbol) = super::split_literal(input)?;
    let unit = AngleUnit::from_symbol(symbol)
        .ok_or_else(|| format!("unrecognized angle unit '{}' in '{}'", symbol, input))?;
    Ok(Angle { value, unit })
}

impl FromStr for Angle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_literal(s).map_err(Error::Validation)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_literal(&raw).map_err(serde::de::Error::custom)
    }
}
