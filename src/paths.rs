//! Path expansion helpers.
//!
//! User-supplied path strings may reference a home directory (`~`) or
//! environment variables such as the data-root variable in the default
//! observations datastore (`$CHERENKOV_DATA/...`). [`expand`] resolves both
//! before the path touches the filesystem.

use directories::UserDirs;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("Invalid env var regex")
});

/// Expand `~` and `$VAR`/`${VAR}` references in a path.
///
/// Unset variables are left verbatim so downstream error messages show the
/// unresolved name instead of an empty segment. A leading `~` only expands
/// when it forms its own path component.
pub fn expand<P: AsRef<Path>>(path: P) -> PathBuf {
    let raw = path.as_ref().to_string_lossy();

    let expanded = ENV_VAR.replace_all(&raw, |caps: &regex::Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
    });

    if let Some(rest) = expanded.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(dirs) = UserDirs::new()
    {
        return dirs.home_dir().join(rest.trim_start_matches('/'));
    }

    PathBuf::from(expanded.as_ref())
}
