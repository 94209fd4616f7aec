// Centralized error handling module
// Error kinds for classification, hashing, verification and manifests

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the checksum engine
/// Every variant carries enough context to print a useful message on its own
#[derive(Debug)]
pub enum ChecksumError {
    /// Existence class: per file, collected and reported at the end of a batch
    FileNotFound { path: PathBuf },
    Unreadable { path: PathBuf },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Reference and algorithm errors
    InvalidHexReference { reference: String },
    UnknownHashType { name: String },
    UnsupportedAlgorithm { algorithm: String },

    /// Verifier preconditions, fatal to a single comparison
    MissingDigest { path: PathBuf, algorithm: String },
    MissingReference { path: PathBuf },

    /// Manifest class, fatal to the whole manifest operation
    ManifestNotFound { path: PathBuf },
    ManifestEmpty { path: PathBuf },
    ManifestUndecodable { path: PathBuf },
    ManifestMalformedLine { path: PathBuf, line: usize },
    UnsupportedManifestName { path: PathBuf, supported: Vec<String> },

    /// Write time
    NoAvailableFiles,

    /// Configuration
    InvalidConfig { path: PathBuf, reason: String },
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChecksumError::FileNotFound { path } => {
                write!(f, "File not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            ChecksumError::Unreadable { path } => {
                write!(f, "Cannot read: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the path is a regular file and that you can read it")
            }
            ChecksumError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} file {}: {}\n", operation, p.display(), source)?;
                } else {
                    write!(f, "I/O error while {}: {}\n", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }

            ChecksumError::InvalidHexReference { reference } => {
                write!(f, "'{}' is not a hexadecimal value\n", reference)?;
                write!(f, "Suggestion: Copy the checksum exactly as published, without prefixes")
            }
            ChecksumError::UnknownHashType { name } => {
                write!(f, "Could not determine the hash type for {}\n", name)?;
                write!(f, "Suggestion: Pass the algorithm explicitly with --algorithm")
            }
            ChecksumError::UnsupportedAlgorithm { algorithm } => {
                write!(f, "Unsupported hash algorithm: {}\n", algorithm)?;
                write!(f, "Suggestion: Use one of md5, sha1, sha224, sha256, sha384, sha512")
            }

            ChecksumError::MissingDigest { path, algorithm } => {
                write!(f, "No {} digest was computed for {}\n", algorithm, path.display())?;
                write!(f, "Suggestion: Hash the file before comparing it")
            }
            ChecksumError::MissingReference { path } => {
                write!(f, "No reference checksum was given for {}\n", path.display())?;
                write!(f, "Suggestion: Supply the checksum published alongside the file")
            }

            ChecksumError::ManifestNotFound { path } => {
                write!(f, "Sum file not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check the path of the sum file")
            }
            ChecksumError::ManifestEmpty { path } => {
                write!(f, "Sum file is empty: {}\n", path.display())?;
                write!(f, "Suggestion: Ensure the sum file contains at least one checksum entry")
            }
            ChecksumError::ManifestUndecodable { path } => {
                write!(f, "Cannot read sum file {}: it is not a text file\n", path.display())?;
                write!(f, "Suggestion: The sum file must contain lines of checksum and file name")
            }
            ChecksumError::ManifestMalformedLine { path, line } => {
                write!(f, "Irregularity in {} at line {}\n", path.display(), line)?;
                write!(f, "Suggestion: Each line must hold exactly a checksum and a file name")
            }
            ChecksumError::UnsupportedManifestName { path, supported } => {
                write!(f, "Unsupported sum file name: {}\n", path.display())?;
                write!(f, "Suggestion: Rename it to one of: {}", supported.join(", "))
            }

            ChecksumError::NoAvailableFiles => {
                write!(f, "No available files for saving hash sums\n")?;
                write!(f, "Suggestion: Check that at least one input file exists and is readable")
            }

            ChecksumError::InvalidConfig { path, reason } => {
                write!(f, "Invalid configuration {}: {}\n", path.display(), reason)?;
                write!(f, "Suggestion: Fix or remove the configuration file")
            }
        }
    }
}

impl std::error::Error for ChecksumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChecksumError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ChecksumError {
    /// Create an error from an io::Error, classifying the common kinds
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(p)) => ChecksumError::FileNotFound { path: p },
            (io::ErrorKind::PermissionDenied, Some(p)) => ChecksumError::Unreadable { path: p },
            (_, path) => ChecksumError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

impl From<io::Error> for ChecksumError {
    fn from(err: io::Error) -> Self {
        ChecksumError::from_io_error(err, "unknown operation", None)
    }
}
