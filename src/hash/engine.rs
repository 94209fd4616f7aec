// Hash engine module
// Streams file bytes in fixed size chunks into one or more digest accumulators

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use rayon::prelude::*;

use super::algorithm::{Accumulator, DigestAlgorithm};
use super::error::ChecksumError;
use super::file::FileIdentity;
use super::progress::Progress;

/// Default chunk size for streaming reads
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

/// Finite, non-restartable sequence of byte chunks read from one file
///
/// Asking the engine for a new stream reopens the file from the start.
pub struct ChunkStream {
    file: File,
    path: PathBuf,
    chunk_size: usize,
    pace: Option<Duration>,
    done: bool,
}

impl ChunkStream {
    /// Number of chunks the file is expected to yield, for progress totals
    pub fn expected_chunks(&self) -> u64 {
        let size = self.file.metadata().map(|m| m.len()).unwrap_or(0);
        size.div_ceil(self.chunk_size as u64)
    }
}

impl Iterator for ChunkStream {
    type Item = Result<Vec<u8>, ChecksumError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buffer = vec![0u8; self.chunk_size];
        let mut filled = 0;
        // Fill the whole chunk unless end of file is reached first
        while filled < buffer.len() {
            match self.file.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(ChecksumError::from_io_error(
                        e,
                        "reading",
                        Some(self.path.clone()),
                    )));
                }
            }
        }
        if filled == 0 {
            self.done = true;
            return None;
        }
        if filled < buffer.len() {
            self.done = true;
        }
        buffer.truncate(filled);
        if let Some(pace) = self.pace {
            thread::sleep(pace);
        }
        Some(Ok(buffer))
    }
}

/// Streaming hash computation over file identities
#[derive(Debug, Clone)]
pub struct HashEngine {
    chunk_size: usize,
    pace: Option<Duration>,
    parallel: bool,
}

impl HashEngine {
    /// Create a new HashEngine with the default chunk size and no pacing
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            pace: None,
            parallel: true,
        }
    }

    /// Create a new HashEngine with a custom chunk size
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            ..Self::new()
        }
    }

    /// Sleep between chunk reads so progress output stays responsive
    pub fn with_pace(mut self, pace: Option<Duration>) -> Self {
        self.pace = pace.filter(|d| !d.is_zero());
        self
    }

    /// Feed accumulators of several algorithms in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Open a fresh chunk stream over the file
    pub fn stream_chunks(&self, identity: &FileIdentity) -> Result<ChunkStream, ChecksumError> {
        self.stream_path(&identity.full_path())
    }

    /// Open a fresh chunk stream over a path, failing if it is not readable
    pub fn stream_path(&self, path: &Path) -> Result<ChunkStream, ChecksumError> {
        if !path.exists() {
            return Err(ChecksumError::FileNotFound { path: path.to_path_buf() });
        }
        if super::file::probe(path) != super::file::ExistenceState::Found {
            return Err(ChecksumError::Unreadable { path: path.to_path_buf() });
        }
        let file = File::open(path)
            .map_err(|e| ChecksumError::from_io_error(e, "opening", Some(path.to_path_buf())))?;
        Ok(ChunkStream {
            file,
            path: path.to_path_buf(),
            chunk_size: self.chunk_size,
            pace: self.pace,
            done: false,
        })
    }

    /// Feed every chunk to each requested algorithm and store the finalized digests
    ///
    /// Algorithms already present in the identity are skipped, so a digest is
    /// never computed twice over the same identity.
    pub fn update_digests<I>(
        &self,
        identity: &mut FileIdentity,
        algorithms: &[DigestAlgorithm],
        chunks: I,
        progress: &mut dyn Progress,
    ) -> Result<(), ChecksumError>
    where
        I: IntoIterator<Item = Result<Vec<u8>, ChecksumError>>,
    {
        let mut accumulators: Vec<Accumulator> = Vec::new();
        for alg in algorithms {
            let pending = identity.digest(*alg).is_none()
                && !accumulators.iter().any(|a| a.algorithm() == *alg);
            if pending {
                accumulators.push(alg.accumulator());
            }
        }
        if accumulators.is_empty() {
            tracing::debug!(path = %identity.full_path().display(), "all digests already computed");
            return Ok(());
        }

        let parallel = self.parallel && accumulators.len() > 1;
        for chunk in chunks {
            let chunk = chunk?;
            if parallel {
                accumulators.par_iter_mut().for_each(|acc| acc.update(&chunk));
            } else {
                for acc in accumulators.iter_mut() {
                    acc.update(&chunk);
                }
            }
            progress.advance();
        }

        for acc in accumulators {
            let alg = acc.algorithm();
            identity.computed.insert(alg, acc.finalize_hex());
        }
        Ok(())
    }

    /// Stream the identity's file and compute the requested digests
    pub fn compute(
        &self,
        identity: &mut FileIdentity,
        algorithms: &[DigestAlgorithm],
        progress: &mut dyn Progress,
    ) -> Result<(), ChecksumError> {
        if algorithms.iter().all(|alg| identity.digest(*alg).is_some()) {
            return Ok(());
        }
        let stream = self.stream_chunks(identity)?;
        let label = format!("Hashing {}", identity.file_name());
        progress.begin(stream.expected_chunks(), &label);
        tracing::debug!(
            path = %identity.full_path().display(),
            algorithms = ?algorithms,
            chunk_size = self.chunk_size,
            "hashing file"
        );
        let result = self.update_digests(identity, algorithms, stream, progress);
        progress.end();
        result
    }

    /// Finalized hex digest, if it was computed
    pub fn digest_of(identity: &FileIdentity, algorithm: DigestAlgorithm) -> Option<&str> {
        identity.digest(algorithm)
    }
}

impl Default for HashEngine {
    fn default() -> Self {
        Self::new()
    }
}
