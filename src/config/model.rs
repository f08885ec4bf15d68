//! Config struct definitions and default implementations.
//!
//! The structs mirror the sections of the analysis configuration document,
//! leaf value types first. Every struct rejects unknown fields and fills
//! absent fields from its schema default, so a constructed tree is always
//! complete and valid. Serialization order follows declaration order to
//! keep emitted documents diffable.

use super::types::*;
use crate::quantity::{Angle, Energy, Timestamp};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A sky direction as frame plus longitude/latitude angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SkyCoordConfig {
    pub frame: Option<Frame>,
    pub lon: Option<Angle>,
    pub lat: Option<Angle>,
}

/// A binned energy axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyAxisConfig {
    pub min: Energy,
    pub max: Energy,
    pub nbins: u32,
}

impl Default for EnergyAxisConfig {
    fn default() -> Self {
        Self {
            min: default_energy_min(),
            max: default_energy_max(),
            nbins: default_nbins(),
        }
    }
}

/// A circular sky region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SpatialCircleConfig {
    pub frame: Option<Frame>,
    pub lon: Option<Angle>,
    pub lat: Option<Angle>,
    pub radius: Option<Angle>,
}

/// An energy interval without binning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyRangeConfig {
    pub min: Energy,
    pub max: Energy,
}

impl Default for EnergyRangeConfig {
    fn default() -> Self {
        Self {
            min: default_energy_min(),
            max: default_energy_max(),
        }
    }
}

/// An absolute time interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct TimeRangeConfig {
    pub start: Option<Timestamp>,
    pub stop: Option<Timestamp>,
}

/// Settings for the flux points stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FluxPointsConfig {
    /// Energy axis the flux points are computed on.
    pub energy: EnergyAxisConfig,
}

/// Settings for the fit stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FitConfig {
    /// Energy range the likelihood fit is restricted to.
    pub fit_range: EnergyRangeConfig,
}

/// Background estimation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    pub method: BackgroundMethod,
    /// Optional exclusion mask file for background region finding.
    pub exclusion: Option<PathBuf>,
}

/// Reconstructed and true energy axes of the dataset geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyAxesConfig {
    pub energy: EnergyAxisConfig,
    pub energy_true: EnergyAxisConfig,
}

/// Observation selection applied when building datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Maximum field-of-view offset for events entering the maps.
    pub offset_max: Angle,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            offset_max: default_offset_max(),
        }
    }
}

/// Field-of-view extent of the map geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FovConfig {
    pub width: Angle,
    pub height: Angle,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            width: default_fov_side(),
            height: default_fov_side(),
        }
    }
}

/// WCS projection of the map geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WcsConfig {
    /// Projection center.
    pub skydir: SkyCoordConfig,
    /// Spatial pixel size.
    pub binsize: Angle,
    pub fov: FovConfig,
    /// Coarser pixel size used when sampling the response functions.
    pub binsize_irf: Angle,
    /// Margin added around the field of view for the response maps.
    pub margin_irf: Angle,
}

impl Default for WcsConfig {
    fn default() -> Self {
        Self {
            skydir: SkyCoordConfig::default(),
            binsize: default_binsize(),
            fov: FovConfig::default(),
            binsize_irf: default_binsize(),
            margin_irf: default_binsize(),
        }
    }
}

/// Dataset geometry: projection, selection, and energy axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GeomConfig {
    pub wcs: WcsConfig,
    pub selection: SelectionConfig,
    pub axes: EnergyAxesConfig,
}

/// Settings for the dataset reduction stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetsConfig {
    /// Reduction mode: "1d" spectral or "3d" cube.
    pub r#type: ReductionType,

    /// Whether observations are stacked into a single dataset.
    pub stack: bool,

    /// Map and axis geometry for the reduction.
    pub geom: GeomConfig,

    /// Map products to produce; defaults to everything the reduction
    /// stage offers.
    pub map_selection: Vec<MapSelection>,

    /// Background estimation settings.
    pub background: BackgroundConfig,

    /// Signal extraction region for spectral reduction.
    pub on_region: SpatialCircleConfig,

    /// Whether to correct for signal leaking out of the on region.
    pub containment_correction: bool,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            r#type: ReductionType::default(),
            stack: default_true(),
            geom: GeomConfig::default(),
            map_selection: MapSelection::available(),
            background: BackgroundConfig::default(),
            on_region: SpatialCircleConfig::default(),
            containment_correction: default_true(),
        }
    }
}

/// Observation selection for the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObservationsConfig {
    /// Data store with the observation index; may reference environment
    /// variables such as `$CHERENKOV_DATA`.
    pub datastore: PathBuf,

    /// Explicit observation identifiers; empty selects everything the
    /// other criteria allow.
    pub obs_ids: Vec<u32>,

    /// Optional file listing observation identifiers.
    pub obs_file: Option<PathBuf>,

    /// Cone selection on observation pointing directions.
    pub obs_cone: SpatialCircleConfig,

    /// Time interval selection on observations.
    pub obs_time: TimeRangeConfig,
}

impl Default for ObservationsConfig {
    fn default() -> Self {
        Self {
            datastore: default_datastore(),
            obs_ids: Vec::new(),
            obs_file: None,
            obs_cone: SpatialCircleConfig::default(),
            obs_time: TimeRangeConfig::default(),
        }
    }
}

impl ObservationsConfig {
    /// The datastore path with `~` and environment variables expanded.
    pub fn datastore_path(&self) -> PathBuf {
        crate::paths::expand(&self.datastore)
    }
}

/// Logging settings, applied to the process via [`crate::logging::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Log level: off, error, warn, info, debug, or trace.
    pub level: String,

    /// Log file destination; stderr when unset.
    pub filename: Option<PathBuf>,

    /// File open mode: "w" truncates (default), "a" appends.
    pub filemode: Option<String>,

    /// Event rendering: "full" (default), "compact", or "pretty".
    pub format: Option<String>,

    /// Timestamp rendering as a chrono strftime string.
    pub datefmt: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            filename: None,
            filemode: None,
            format: None,
            datefmt: None,
        }
    }
}

/// General settings that apply to the whole analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub log: LogConfig,

    /// Output folder where produced files are stored.
    pub outdir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            outdir: default_outdir(),
        }
    }
}

/// Root of the analysis configuration tree.
///
/// Construct via [`Default`], [`AnalysisConfig::read`],
/// [`AnalysisConfig::from_yaml`], [`AnalysisConfig::from_template`], or
/// [`AnalysisConfig::update`]. Fields are public for read access; every
/// field type is itself validated, so consumers cannot assemble an invalid
/// tree without going through a validated constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub general: GeneralConfig,
    pub observations: ObservationsConfig,
    pub datasets: DatasetsConfig,
    pub fit: FitConfig,
    pub flux_points: FluxPointsConfig,
}
