// Path splitting utilities
// Breaks a path into directory, base name and extension and joins them back

use std::path::{Path, PathBuf};

/// Marker some sum files put before a file name to flag binary mode
pub const BINARY_MARKER: char = '*';

/// Split a path once at the last separator and once at the last '.' of the file name
///
/// A dot that starts the file name (hidden files) does not begin an extension,
/// so `.bashrc` has no extension and `archive.tar.gz` has extension `.gz`.
pub fn split_path(path: &Path) -> (PathBuf, String, String) {
    let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(idx) => {
            let idx = idx + leading_dots;
            (directory, file_name[..idx].to_string(), file_name[idx..].to_string())
        }
        None => (directory, file_name, String::new()),
    }
}

/// Join directory, base name and extension back into one path
pub fn join_path(directory: &Path, name: &str, extension: &str) -> PathBuf {
    let file_name = format!("{}{}", name, extension);
    if directory.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        directory.join(file_name)
    }
}

/// Strip a leading binary marker from a base name, if there is one to strip
pub fn strip_binary_marker(name: &str) -> Option<&str> {
    if name.len() > 1 {
        name.strip_prefix(BINARY_MARKER)
    } else {
        None
    }
}
