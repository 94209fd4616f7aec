// Digest algorithm set
// The fixed list of supported algorithms and their streaming accumulators

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use super::error::ChecksumError;

/// A supported hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported algorithm, in canonical order
    pub const ALL: [DigestAlgorithm; 6] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the digest in hex characters
    pub fn hex_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 32,
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Sha224 => 56,
            DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Sha384 => 96,
            DigestAlgorithm::Sha512 => 128,
        }
    }

    /// Infer the algorithm from the length of a hex digest
    pub fn from_digest_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|alg| alg.hex_len() == len)
    }

    /// Infer the algorithm from an algorithm name appearing anywhere in `name`
    ///
    /// The longest contained name wins; on equal length the later algorithm
    /// in `ALL` is preferred.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|alg| lower.contains(alg.name()))
            .max_by_key(|alg| alg.name().len())
    }

    /// Infer the algorithm from a sum file name such as `SHA256SUMS` or `md5sum.txt`
    pub fn from_manifest_name(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|alg| {
                stem.ends_with(&format!("{}sum", alg.name()))
                    || stem.ends_with(&format!("{}sums", alg.name()))
            })
            .max_by_key(|alg| alg.name().len())
    }

    /// Sum file names recognized by `from_manifest_name`
    pub fn manifest_names() -> Vec<String> {
        Self::ALL
            .into_iter()
            .flat_map(|alg| [format!("{}sum", alg.name()), format!("{}sums", alg.name())])
            .collect()
    }

    /// Create a fresh accumulator for this algorithm
    pub fn accumulator(self) -> Accumulator {
        match self {
            DigestAlgorithm::Md5 => Accumulator::Md5(Md5::new()),
            DigestAlgorithm::Sha1 => Accumulator::Sha1(Sha1::new()),
            DigestAlgorithm::Sha224 => Accumulator::Sha224(Sha224::new()),
            DigestAlgorithm::Sha256 => Accumulator::Sha256(Sha256::new()),
            DigestAlgorithm::Sha384 => Accumulator::Sha384(Sha384::new()),
            DigestAlgorithm::Sha512 => Accumulator::Sha512(Sha512::new()),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| ChecksumError::UnsupportedAlgorithm {
                algorithm: s.to_string(),
            })
    }
}

/// Running hash state for one algorithm
pub enum Accumulator {
    Md5(Md5),
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl Accumulator {
    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            Accumulator::Md5(_) => DigestAlgorithm::Md5,
            Accumulator::Sha1(_) => DigestAlgorithm::Sha1,
            Accumulator::Sha224(_) => DigestAlgorithm::Sha224,
            Accumulator::Sha256(_) => DigestAlgorithm::Sha256,
            Accumulator::Sha384(_) => DigestAlgorithm::Sha384,
            Accumulator::Sha512(_) => DigestAlgorithm::Sha512,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Accumulator::Md5(h) => h.update(data),
            Accumulator::Sha1(h) => h.update(data),
            Accumulator::Sha224(h) => h.update(data),
            Accumulator::Sha256(h) => h.update(data),
            Accumulator::Sha384(h) => h.update(data),
            Accumulator::Sha512(h) => h.update(data),
        }
    }

    /// Consume the accumulator and return the lowercase hex digest
    pub fn finalize_hex(self) -> String {
        match self {
            Accumulator::Md5(h) => bytes_to_hex(&h.finalize()),
            Accumulator::Sha1(h) => bytes_to_hex(&h.finalize()),
            Accumulator::Sha224(h) => bytes_to_hex(&h.finalize()),
            Accumulator::Sha256(h) => bytes_to_hex(&h.finalize()),
            Accumulator::Sha384(h) => bytes_to_hex(&h.finalize()),
            Accumulator::Sha512(h) => bytes_to_hex(&h.finalize()),
        }
    }
}

/// Convert bytes to hexadecimal string
fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
