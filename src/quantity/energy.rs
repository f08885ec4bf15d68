//! Energy scalar type with dimensional validation.

use super::angle::AngleUnit;
use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Recognized energy units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    /// Electronvolts.
    Ev,
    /// Kiloelectronvolts.
    Kev,
    /// Megaelectronvolts.
    Mev,
    /// Gigaelectronvolts.
    Gev,
    /// Teraelectronvolts.
    Tev,
    /// Petaelectronvolts.
    Pev,
    /// Erg.
    Erg,
    /// Joules.
    Joule,
}

impl EnergyUnit {
    /// Resolve a unit symbol to an energy unit.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "eV" => Some(Self::Ev),
            "keV" => Some(Self::Kev),
            "MeV" => Some(Self::Mev),
            "GeV" => Some(Self::Gev),
            "TeV" => Some(Self::Tev),
            "PeV" => Some(Self::Pev),
            "erg" => Some(Self::Erg),
            "J" => Some(Self::Joule),
            _ => None,
        }
    }

    /// Canonical unit symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ev => "eV",
            Self::Kev => "keV",
            Self::Mev => "MeV",
            Self::Gev => "GeV",
            Self::Tev => "TeV",
            Self::Pev => "PeV",
            Self::Erg => "erg",
            Self::Joule => "J",
        }
    }
}

/// An energy quantity as a scalar value with an energy unit.
///
/// Parsing enforces the physical dimension: a literal whose unit resolves
/// to anything other than energy is rejected with the unit named in the
/// message. The canonical textual form is `"<value> <unit>"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    value: f64,
    unit: EnergyUnit,
}

impl Energy {
    /// Construct an energy from a value and a typed unit.
    pub fn new(value: f64, unit: EnergyUnit) -> Self {
        Self { value, unit }
    }

    /// Scalar value in the carried unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The carried unit.
    pub fn unit(&self) -> EnergyUnit {
        self.unit
    }
}

fn parse_literal(input: &str) -> Result<Energy, String> {
    let (value, symbol) = super::split_literal(input)?;
    match EnergyUnit::from_symbol(symbol) {
        Some(unit) => Ok(Energy { value, unit }),
        // A recognized unit of another dimension is a dimension error, an
        // unknown symbol a parse error.
        None if AngleUnit::from_symbol(symbol).is_some() => {
            Err(format!("invalid unit for energy: '{}'", symbol))
        }
        None => Err(format!("unrecognized unit '{}' in '{}'", symbol, input)),
    }
}

impl FromStr for Energy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse_literal(s).map_err(Error::Validation)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl Serialize for Energy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Energy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_literal(&raw).map_err(serde::de::Error::custom)
    }
}
