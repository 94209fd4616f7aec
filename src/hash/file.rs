// File identity module
// One path under consideration, its existence class and the digests computed for it

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use super::algorithm::DigestAlgorithm;
use super::hexvalue::HexValue;
use super::path_utils;
use super::registry::FileRegistry;

/// Existence class of a file, decided once when the identity is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ExistenceState {
    Found,
    NotFoundOnDisk,
    ExistsButUnreadable,
}

/// A path with its reference checksum and computed digests
#[derive(Debug, Clone)]
pub struct FileIdentity {
    directory: PathBuf,
    name: String,
    extension: String,
    reference: Option<String>,
    reference_value: Option<HexValue>,
    state: ExistenceState,
    pub(crate) computed: BTreeMap<DigestAlgorithm, String>,
}

impl FileIdentity {
    /// Create an identity for `path` and register it in `registry`
    ///
    /// Never fails: a missing or unreadable path produces an identity in the
    /// matching state. A base name starting with the binary marker is
    /// retried without the marker when the path does not exist as given.
    pub fn new(path: impl AsRef<Path>, reference: Option<&str>, registry: &mut FileRegistry) -> Self {
        let (directory, mut name, extension) = path_utils::split_path(path.as_ref());

        if let Some(stripped) = path_utils::strip_binary_marker(&name) {
            if !path_utils::join_path(&directory, &name, &extension).exists() {
                name = stripped.to_string();
            }
        }

        let reference = reference
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        let reference_value = reference.as_deref().and_then(HexValue::parse);

        let full_path = path_utils::join_path(&directory, &name, &extension);
        let state = probe(&full_path);

        let identity = Self {
            directory,
            name,
            extension,
            reference,
            reference_value,
            state,
            computed: BTreeMap::new(),
        };
        registry.register(&identity);
        identity
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Base name without its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Base name with its extension
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, self.extension)
    }

    pub fn full_path(&self) -> PathBuf {
        path_utils::join_path(&self.directory, &self.name, &self.extension)
    }

    pub fn state(&self) -> ExistenceState {
        self.state
    }

    pub fn is_found(&self) -> bool {
        self.state == ExistenceState::Found
    }

    /// Size in bytes, only for found files
    pub fn size(&self) -> Option<u64> {
        if !self.is_found() {
            return None;
        }
        fs::metadata(self.full_path()).ok().map(|m| m.len())
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// The reference checksum as a number, present iff it is valid hex
    pub fn reference_value(&self) -> Option<&HexValue> {
        self.reference_value.as_ref()
    }

    pub fn digest(&self, algorithm: DigestAlgorithm) -> Option<&str> {
        self.computed.get(&algorithm).map(String::as_str)
    }

    pub fn computed_digests(&self) -> &BTreeMap<DigestAlgorithm, String> {
        &self.computed
    }

    /// Re-run the readability probe against the filesystem
    pub fn is_readable(&self) -> bool {
        probe(&self.full_path()) == ExistenceState::Found
    }
}

/// Classify a path: found only if it exists, is not a directory and one byte can be read
pub(crate) fn probe(path: &Path) -> ExistenceState {
    if !path.exists() {
        return ExistenceState::NotFoundOnDisk;
    }
    if path.is_dir() {
        return ExistenceState::ExistsButUnreadable;
    }
    let mut byte = [0u8; 1];
    match File::open(path).and_then(|mut f| f.read(&mut byte)) {
        Ok(_) => ExistenceState::Found,
        Err(_) => ExistenceState::ExistsButUnreadable,
    }
}
