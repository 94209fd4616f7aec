// Sum file module
// Reads and writes plain text "<checksum> <path>" files

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::algorithm::DigestAlgorithm;
use super::error::ChecksumError;
use super::file::FileIdentity;

/// One validated line of a sum file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ManifestLine {
    pub reference: String,
    pub path: PathBuf,
}

/// Handler for reading and writing sum files
pub struct SumManifest;

impl SumManifest {
    /// Default output file name for an algorithm, e.g. `sha256sum.txt`
    pub fn default_output_name(algorithm: DigestAlgorithm) -> PathBuf {
        PathBuf::from(format!("{}sum.txt", algorithm.name()))
    }

    /// Algorithm used by every entry of a sum file, read from its file name
    pub fn algorithm_for(path: &Path) -> Result<DigestAlgorithm, ChecksumError> {
        DigestAlgorithm::from_manifest_name(path).ok_or_else(|| {
            ChecksumError::UnsupportedManifestName {
                path: path.to_path_buf(),
                supported: DigestAlgorithm::manifest_names(),
            }
        })
    }

    /// Parse a whole sum file
    ///
    /// All or nothing: the first line that is not exactly two whitespace
    /// separated tokens rejects the file, reporting its 1-based line number.
    pub fn parse(path: &Path) -> Result<Vec<ManifestLine>, ChecksumError> {
        if !path.exists() {
            return Err(ChecksumError::ManifestNotFound { path: path.to_path_buf() });
        }
        let bytes = fs::read(path)
            .map_err(|e| ChecksumError::from_io_error(e, "reading sum file", Some(path.to_path_buf())))?;
        let content = String::from_utf8(bytes)
            .map_err(|_| ChecksumError::ManifestUndecodable { path: path.to_path_buf() })?;

        let lines = Self::parse_str(&content).map_err(|line| ChecksumError::ManifestMalformedLine {
            path: path.to_path_buf(),
            line,
        })?;

        if lines.is_empty() {
            return Err(ChecksumError::ManifestEmpty { path: path.to_path_buf() });
        }
        tracing::debug!(path = %path.display(), entries = lines.len(), "parsed sum file");
        Ok(lines)
    }

    /// Parse sum file content, returning the offending line number on failure
    pub fn parse_str(content: &str) -> Result<Vec<ManifestLine>, usize> {
        let mut parsed = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(line) {
                Some(entry) => parsed.push(entry),
                None => return Err(idx + 1),
            }
        }
        Ok(parsed)
    }

    /// Parse one non-blank line; `None` unless it has exactly two tokens
    pub fn parse_line(line: &str) -> Option<ManifestLine> {
        let mut tokens = line.split_whitespace();
        let (reference, path) = (tokens.next()?, tokens.next()?);
        if tokens.next().is_some() {
            return None;
        }
        Some(ManifestLine {
            reference: reference.to_string(),
            path: PathBuf::from(path),
        })
    }

    /// Write a single line: `<checksum> <path>`
    pub fn write_entry(writer: &mut impl Write, digest: &str, path: &Path) -> io::Result<()> {
        writeln!(writer, "{} {}", digest, path.display())
    }

    /// Write the digests of every found identity hashed with `algorithm`
    ///
    /// Truncates or creates `path` and returns the number of lines written.
    pub fn write(
        path: &Path,
        identities: &[FileIdentity],
        algorithm: DigestAlgorithm,
    ) -> Result<usize, ChecksumError> {
        let available: Vec<(&str, PathBuf)> = identities
            .iter()
            .filter(|f| f.is_found())
            .filter_map(|f| f.digest(algorithm).map(|d| (d, f.full_path())))
            .collect();
        if available.is_empty() {
            return Err(ChecksumError::NoAvailableFiles);
        }

        let io_err = |e: io::Error| ChecksumError::from_io_error(e, "writing sum file", Some(path.to_path_buf()));
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for (digest, file_path) in &available {
            Self::write_entry(&mut writer, digest, file_path).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        tracing::info!(path = %path.display(), entries = available.len(), "wrote sum file");
        Ok(available.len())
    }
}
