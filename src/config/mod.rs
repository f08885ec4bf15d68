//! Configuration model for the analysis pipeline.
//!
//! This module defines the `AnalysisConfig` tree: strictly-validated nested
//! sections with schema defaults. Unknown fields are rejected everywhere,
//! quantity-valued fields normalize through the validated scalar types, and
//! the `update` operation overlays only explicitly-set (non-default) fields
//! of an override onto a base configuration.

mod docs;
mod merge;
mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use docs::{doc_sections, doc_text, help};
pub use model::{
    AnalysisConfig, BackgroundConfig, DatasetsConfig, EnergyAxesConfig, EnergyAxisConfig,
    EnergyRangeConfig, FitConfig, FluxPointsConfig, FovConfig, GeneralConfig, GeomConfig,
    LogConfig, ObservationsConfig, SelectionConfig, SkyCoordConfig, SpatialCircleConfig,
    TimeRangeConfig, WcsConfig,
};
pub use types::{BackgroundMethod, Frame, MapSelection, ReductionType};
