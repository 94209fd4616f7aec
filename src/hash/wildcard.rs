// Wildcard pattern expansion module
// Expands shell style patterns in path arguments using glob

use std::path::PathBuf;

use super::error::ChecksumError;

/// Expand a wildcard pattern into the list of matching paths
///
/// A pattern that matches nothing, or is not a valid pattern, is returned
/// as a literal path so that it is later classified as not found.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, ChecksumError> {
    if !contains_wildcard(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::debug!(pattern, error = %e, "not a glob pattern, using it literally");
            return Ok(vec![PathBuf::from(pattern)]);
        }
    };

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(ChecksumError::from_io_error(e.into(), "expanding pattern", Some(path)));
            }
        }
    }

    if matches.is_empty() {
        return Ok(vec![PathBuf::from(pattern)]);
    }
    matches.sort();
    Ok(matches)
}

/// Expand every argument, keeping argument order
pub fn expand_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, ChecksumError> {
    let mut expanded = Vec::new();
    for pattern in patterns {
        expanded.extend(expand_pattern(pattern.as_ref())?);
    }
    Ok(expanded)
}

/// Check if a string contains wildcard characters
pub fn contains_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}
