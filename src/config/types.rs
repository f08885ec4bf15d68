//! Configuration enums and default values.
//!
//! This module defines the enum-valued fields of the schema and the
//! default value functions used by the config structs.

use crate::quantity::{Angle, AngleUnit, Energy, EnergyUnit};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Data reduction mode for the datasets stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReductionType {
    /// Spectral, region-based reduction (default).
    #[default]
    #[serde(rename = "1d")]
    Spectrum,
    /// Cube, map-based reduction.
    #[serde(rename = "3d")]
    Cube,
}

impl ReductionType {
    /// The literal used in configuration documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spectrum => "1d",
            Self::Cube => "3d",
        }
    }
}

/// Celestial coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    Icrs,
    Galactic,
}

/// Background estimation method for spectral reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMethod {
    /// Reflected-regions background (default, the only supported method).
    #[default]
    Reflected,
}

/// Map products the data reduction stage can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapSelection {
    Counts,
    Exposure,
    Background,
    Psf,
    Edisp,
}

impl MapSelection {
    /// Full selection set offered by the map data reduction stage.
    ///
    /// This is the schema default for `datasets.map_selection`.
    pub fn available() -> Vec<MapSelection> {
        vec![
            Self::Counts,
            Self::Exposure,
            Self::Background,
            Self::Psf,
            Self::Edisp,
        ]
    }
}

// Default value functions for the config structs

pub(crate) fn default_energy_min() -> Energy {
    Energy::new(0.1, EnergyUnit::Tev)
}
pub(crate) fn default_energy_max() -> Energy {
    Energy::new(10.0, EnergyUnit::Tev)
}
pub(crate) fn default_nbins() -> u32 {
    30
}
pub(crate) fn default_offset_max() -> Angle {
    Angle::new(2.5, AngleUnit::Deg)
}
pub(crate) fn default_fov_side() -> Angle {
    Angle::new(5.0, AngleUnit::Deg)
}
pub(crate) fn default_binsize() -> Angle {
    Angle::new(0.1, AngleUnit::Deg)
}
pub(crate) fn default_datastore() -> PathBuf {
    PathBuf::from("$CHERENKOV_DATA/hess-dl3-dr1/")
}
pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
pub(crate) fn default_outdir() -> String {
    ".".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
