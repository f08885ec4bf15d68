//! Config loading, serialization, merge, and template operations.

use super::merge::{deep_merge, prune_defaults};
use super::model::AnalysisConfig;
use crate::error::{Error, Result};
use crate::paths;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::Path;

const TEMPLATE_1D: &str = include_str!("data/template-1d.yaml");
const TEMPLATE_3D: &str = include_str!("data/template-3d.yaml");

impl AnalysisConfig {
    /// Load a config from a YAML file.
    ///
    /// `~` and environment variables in `path` are expanded first.
    ///
    /// # Returns
    ///
    /// * `Ok(AnalysisConfig)` - Successfully loaded and validated config
    /// * `Err(Error::FileRead)` - Missing or unreadable file
    /// * `Err(Error::Schema | Error::Validation)` - Schema-invalid content
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = paths::expand(path);
        let content = std::fs::read_to_string(&path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string.
    ///
    /// Unknown fields anywhere in the document fail with [`Error::Schema`];
    /// malformed or out-of-set values with [`Error::Validation`]. Absent
    /// fields resolve to their schema defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(classify)
    }

    /// Construct a config from an in-memory YAML value mapping.
    ///
    /// Same failure modes as [`AnalysisConfig::from_yaml`].
    pub fn from_value(value: Value) -> Result<Self> {
        serde_yaml::from_value(value).map_err(classify)
    }

    /// Create a config from a built-in template.
    ///
    /// Available templates: `"1d"` (spectral, region-based reduction) and
    /// `"3d"` (cube, map-based reduction). Any other key fails with
    /// [`Error::UnknownTemplate`].
    pub fn from_template(template: &str) -> Result<Self> {
        match template {
            "1d" => Self::from_yaml(TEMPLATE_1D),
            "3d" => Self::from_yaml(TEMPLATE_3D),
            other => Err(Error::UnknownTemplate(other.to_string())),
        }
    }

    /// Serialize the fully-resolved config to a YAML string.
    ///
    /// All fields are emitted, defaults included, in declaration order.
    /// Quantities render as `"<value> <unit>"`, timestamps as their
    /// canonical string form, unset optional fields as `null`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::Serialize)
    }

    /// Write the serialized config to a YAML file.
    ///
    /// `~` and environment variables in `path` are expanded first. If the
    /// destination exists and `overwrite` is false the call fails with
    /// [`Error::FileExists`] and the existing content is left untouched.
    ///
    /// The write is plain, not atomic: a crash mid-write can leave a
    /// partial file.
    pub fn write<P: AsRef<Path>>(&self, path: P, overwrite: bool) -> Result<()> {
        let path = paths::expand(path);
        if path.exists() && !overwrite {
            return Err(Error::FileExists(path));
        }
        let content = self.to_yaml()?;
        std::fs::write(&path, content).map_err(|source| Error::FileWrite {
            path: path.clone(),
            source,
        })
    }

    /// Produce a new config equal to this one with every explicitly-set
    /// field of `overrides` overlaid onto it.
    ///
    /// "Explicitly set" means differing from the schema default: fields
    /// left at default in the override never clobber the base, and an
    /// override that re-sets a field to its default value is
    /// indistinguishable from one that never touched it. Nested sections
    /// merge field by field; list-valued fields are replaced wholesale.
    /// The merged result passes through the full construction path, so an
    /// override producing an invalid composite fails without modifying
    /// `self`.
    pub fn update(&self, overrides: &AnalysisConfig) -> Result<Self> {
        let defaults =
            serde_yaml::to_value(AnalysisConfig::default()).map_err(Error::Serialize)?;
        let base = serde_yaml::to_value(self).map_err(Error::Serialize)?;
        let overlay = serde_yaml::to_value(overrides).map_err(Error::Serialize)?;

        let mut merged =
            prune_defaults(&base, &defaults).unwrap_or_else(|| Value::Mapping(Mapping::new()));
        if let Some(overlay) = prune_defaults(&overlay, &defaults) {
            deep_merge(&mut merged, overlay);
        }
        Self::from_value(merged)
    }

    /// [`AnalysisConfig::update`] with the override supplied as YAML text.
    ///
    /// The override text is validated as a full document first, so an
    /// invalid override fails before any merging happens.
    pub fn update_from_yaml(&self, yaml: &str) -> Result<Self> {
        let overrides = Self::from_yaml(yaml)?;
        self.update(&overrides)
    }

    /// [`AnalysisConfig::update`] with the override supplied as an
    /// in-memory YAML value mapping.
    pub fn update_from_value(&self, value: Value) -> Result<Self> {
        let overrides = Self::from_value(value)?;
        self.update(&overrides)
    }

    /// Apply this config's logging section to the process.
    ///
    /// Delegates to [`crate::logging::apply`]; see there for the
    /// global-state caveats.
    pub fn apply_logging(&self) -> Result<()> {
        crate::logging::apply(&self.general.log)
    }

    /// Print documentation for a configuration section.
    ///
    /// An empty `section` prints every documented section in file order;
    /// an unknown name prints nothing.
    pub fn help(section: &str) {
        super::docs::help(section)
    }
}

/// Display settings as the type name followed by indented YAML.
impl fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AnalysisConfig")?;
        writeln!(f)?;
        let body = self.to_yaml().map_err(|_| fmt::Error)?;
        for line in body.lines() {
            writeln!(f, "    {}", line)?;
        }
        Ok(())
    }
}

/// Map a serde error onto the config error taxonomy.
///
/// serde reports unknown struct fields with a fixed message prefix; those
/// are schema violations, everything else is a value problem.
fn classify(err: serde_yaml::Error) -> Error {
    let message = err.to_string();
    if message.contains("unknown field") {
        Error::Schema(message)
    } else {
        Error::Validation(message)
    }
}
