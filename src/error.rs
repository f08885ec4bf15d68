//! Error types for the cherenkov configuration model.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration operations.
///
/// The variants follow the failure taxonomy of the configuration layer:
/// schema violations, value validation failures, file access problems, and
/// unknown template lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// An unknown field was supplied during construction.
    #[error("unknown configuration field: {0}")]
    Schema(String),

    /// A field value failed its type, dimension, or enum check.
    #[error("invalid configuration value: {0}")]
    Validation(String),

    /// The source file is missing or unreadable.
    #[error("failed to read config file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The write destination exists and overwrite was not requested.
    #[error("file exists already: {}", .0.display())]
    FileExists(PathBuf),

    /// Writing the serialized config to disk failed.
    #[error("failed to write config file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the config to YAML failed.
    #[error("failed to serialize config to YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// An unknown template key was requested.
    #[error("unknown template '{0}', available templates: \"1d\", \"3d\"")]
    UnknownTemplate(String),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
