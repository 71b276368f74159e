// src/discover/mod.rs

use glob::glob;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Extension assumed for data drops when the caller has no override.
pub const DEFAULT_EXTENSION: &str = ".csv";

/// Matches an embedded day-month-year marker like `27Feb2025`.
static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2}[A-Za-z]{3}\d{4})").unwrap());

#[derive(Debug, Error)]
pub enum FindError {
    #[error("directory `{0}` does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("no files matching `{pattern}` in `{directory}`")]
    NoMatch { directory: PathBuf, pattern: String },

    /// The prefix/extension pair produced a pattern `glob` cannot compile,
    /// e.g. an unmatched `[`.
    #[error("invalid search pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Find the most recent file named `{prefix}_*{extension}` directly inside
/// `directory`.
///
/// "Most recent" means the path whose first embedded date token (`27Feb2025`
/// style) is greatest under plain string comparison. The token is never
/// parsed as a date; a path with no token sorts with the empty key, i.e.
/// last. The file itself is not opened.
pub fn find_latest(
    directory: impl AsRef<Path>,
    prefix: &str,
    extension: &str,
) -> Result<PathBuf, FindError> {
    let directory = directory.as_ref();
    info!(directory = %directory.display(), prefix, extension, "looking for latest drop");

    if !directory.exists() {
        return Err(FindError::DirectoryNotFound(directory.to_path_buf()));
    }

    let pattern = format!("{}/{}_*{}", directory.display(), prefix, extension);
    let mut files: Vec<PathBuf> = glob(&pattern)
        .map_err(|source| FindError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(Result::ok)
        .collect();
    debug!(?files, "matched files");

    if files.is_empty() {
        return Err(FindError::NoMatch {
            directory: directory.to_path_buf(),
            pattern,
        });
    }

    // Descending by token, compared as text. Stable, so equal keys keep
    // glob's alphabetical enumeration order.
    files.sort_by_cached_key(|path| Reverse(date_token(path)));

    let latest = files.swap_remove(0);
    info!(latest = %latest.display(), "latest drop");
    Ok(latest)
}

/// First date token anywhere in the rendered path, or `""` when absent.
fn date_token(path: &Path) -> String {
    let text = path.to_string_lossy();
    DATE_TOKEN
        .find(&text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
