use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::error::HttpError;

use super::{DEFAULT_TARGETS, Target};

/// Resolves the run's target list: explicit URLs win, then a targets file,
/// then the built-in list.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a URL is invalid, or the
/// resulting list is empty.
pub fn resolve_targets(urls: &[String], urls_file: Option<&str>) -> Result<Vec<Target>, HttpError> {
    if !urls.is_empty() {
        return parse_targets(urls.iter().map(String::as_str));
    }
    if let Some(path) = urls_file {
        return read_targets_file(Path::new(path));
    }
    Ok(default_targets())
}

#[must_use]
pub fn default_targets() -> Vec<Target> {
    DEFAULT_TARGETS.iter().copied().map(Target::from).collect()
}

/// Reads newline-separated targets; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns an error when the file cannot be read or holds no valid targets.
pub fn read_targets_file(path: &Path) -> Result<Vec<Target>, HttpError> {
    let content =
        std::fs::read_to_string(path).map_err(|err| HttpError::ReadTargetsFile {
            path: path.to_path_buf(),
            source: err,
        })?;
    let targets = parse_targets(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )?;
    debug!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Validates URLs and drops repeated entries, keeping first occurrences.
///
/// # Errors
///
/// Returns an error for an unparsable URL, a non-http(s) scheme, or an empty
/// input.
pub fn parse_targets<'line, I>(lines: I) -> Result<Vec<Target>, HttpError>
where
    I: IntoIterator<Item = &'line str>,
{
    let mut seen = BTreeSet::new();
    let mut targets = Vec::new();
    for line in lines {
        let raw = line.trim();
        let url = Url::parse(raw).map_err(|err| HttpError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::UnsupportedScheme {
                url: raw.to_owned(),
                scheme: url.scheme().to_owned(),
            });
        }
        if seen.insert(raw.to_owned()) {
            targets.push(Target::from(raw));
        }
    }
    if targets.is_empty() {
        return Err(HttpError::TargetListEmpty);
    }
    Ok(targets)
}
