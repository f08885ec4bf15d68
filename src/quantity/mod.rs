//! Validated physical scalar types for the configuration schema.
//!
//! Configuration fields that carry physical values use these types instead
//! of raw strings or floats: [`Angle`] and [`Energy`] parse the quantity
//! literal grammar `<number> <unit>` and normalize to a value/unit pair,
//! [`Timestamp`] parses recognized absolute-time strings. Each type only
//! exists via a validated constructor, so a configuration holding one is
//! valid by construction. All three serialize as their canonical textual
//! form.
//!
//! Unit arithmetic and conversions are out of scope here; consumers that
//! need them interpret the value/unit pair themselves.

mod angle;
mod energy;
mod time;


pub use angle::{Angle, AngleUnit};
pub use energy::{Energy, EnergyUnit};
pub use time::Timestamp;

use regex::Regex;
use std::sync::LazyLock;

static QUANTITY_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z]+)\s*$")
        .expect("Invalid quantity literal regex")
});

/// Split a quantity literal into its numeric value and unit symbol.
///
/// Returns a plain reason string on failure; callers wrap it into the
/// error type appropriate for their context.
fn split_literal(input: &str) -> Result<(f64, &str), String> {
    let caps = QUANTITY_LITERAL
        .captures(input)
        .ok_or_else(|| format!("expected a '<number> <unit>' literal, got '{}'", input))?;

    let number = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let value: f64 = number
        .parse()
        .map_err(|_| format!("invalid number '{}' in '{}'", number, input))?;

    let unit = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    Ok((value, unit))
}
