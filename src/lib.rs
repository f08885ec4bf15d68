//! Cherenkov: typed, validated configuration model for gamma-ray analysis
//! pipelines.
//!
//! The crate centers on [`AnalysisConfig`], a tree of strictly-typed
//! configuration sections with schema defaults. Configurations are created
//! from defaults, loaded from YAML files or strings, merged with overrides
//! via [`AnalysisConfig::update`], and serialized back to human-editable
//! YAML. Every construction path validates the full document: unknown
//! fields, malformed quantity literals, wrong physical dimensions, and
//! out-of-set enum values are all rejected up front.
//!
//! Physical scalars (angles, energies, timestamps) are carried as validated
//! value types from the [`quantity`] module, so a constructed configuration
//! cannot hold an invalid scalar.
//!
//! The one process-global side effect lives in [`logging`]: applying a
//! configuration's logging section installs the global tracing subscriber.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod quantity;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
