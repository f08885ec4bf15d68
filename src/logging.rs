//! Process logging configuration.
//!
//! [`apply`] installs the global tracing subscriber from a
//! [`LogConfig`](crate::config::LogConfig). This mutates process-wide state
//! beyond the configuration object itself: every crate logging through
//! `tracing` in this process is affected. The settings are validated before
//! anything global is touched, so an invalid configuration never
//! half-applies. The first successful call wins; later calls (same or
//! different settings) are accepted no-ops. There is no rollback.

use crate::config::LogConfig;
use crate::error::{Error, Result};
use crate::paths;
use std::fs::OpenOptions;
use std::io;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Timestamp rendering used when `datefmt` is not set.
const DEFAULT_DATEFMT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Event renderings accepted for `LogConfig.format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Full,
    Compact,
    Pretty,
}

fn parse_format(format: Option<&str>) -> Result<Format> {
    match format {
        None | Some("full") => Ok(Format::Full),
        Some("compact") => Ok(Format::Compact),
        Some("pretty") => Ok(Format::Pretty),
        Some(other) => Err(Error::Validation(format!(
            "invalid log format '{}', expected 'full', 'compact' or 'pretty'",
            other
        ))),
    }
}

/// Apply a logging configuration to the process.
///
/// Level, destination, event format, and timestamp format are taken from
/// the config: `filename`/`filemode` select a log file (`"a"` appends,
/// otherwise the file is truncated), stderr is used when no file is set,
/// and `datefmt` is a chrono strftime string.
///
/// Returns a [`Error::Validation`] for an unknown level, format, or
/// filemode. If the global subscriber is already installed the call leaves
/// it in place and returns Ok.
pub fn apply(log: &LogConfig) -> Result<()> {
    let level = LevelFilter::from_str(&log.level).map_err(|_| {
        Error::Validation(format!(
            "invalid log level '{}', expected one of off, error, warn, info, debug, trace",
            log.level
        ))
    })?;
    let format = parse_format(log.format.as_deref())?;
    let append = match log.filemode.as_deref() {
        None | Some("w") => false,
        Some("a") => true,
        Some(other) => {
            return Err(Error::Validation(format!(
                "invalid log filemode '{}', expected 'w' or 'a'",
                other
            )));
        }
    };
    let timer = ChronoLocal::new(
        log.datefmt
            .clone()
            .unwrap_or_else(|| DEFAULT_DATEFMT.to_string()),
    );

    let (writer, ansi) = match &log.filename {
        Some(filename) => {
            let path = paths::expand(filename);
            let mut options = OpenOptions::new();
            options.create(true);
            if append {
                options.append(true);
            } else {
                options.write(true).truncate(true);
            }
            let file = options.open(&path).map_err(|source| Error::FileWrite {
                path: path.clone(),
                source,
            })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(timer)
        .with_writer(writer)
        .with_ansi(ansi);

    let installed = match format {
        Format::Full => builder.try_init().is_ok(),
        Format::Compact => builder.compact().try_init().is_ok(),
        Format::Pretty => builder.pretty().try_init().is_ok(),
    };

    if installed {
        tracing::info!(level = %log.level, "applied logging configuration");
    } else {
        tracing::debug!("logging already configured, keeping existing settings");
    }
    Ok(())
}
