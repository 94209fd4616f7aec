// Checksum core library
// File classification, streaming hash computation, verification and sum files

pub mod algorithm;
pub mod engine;
pub mod error;
pub mod file;
pub mod hexvalue;
pub mod manifest;
pub mod path_utils;
pub mod process;
pub mod progress;
pub mod registry;
pub mod verify;
pub mod wildcard;

// Re-export commonly used types for convenience
pub use algorithm::{Accumulator, DigestAlgorithm};
pub use engine::{ChunkStream, HashEngine, DEFAULT_CHUNK_SIZE};
pub use error::ChecksumError;
pub use file::{ExistenceState, FileIdentity};
pub use hexvalue::HexValue;
pub use manifest::{ManifestLine, SumManifest};
pub use process::{BatchReport, DumpReport, FileReport, Outcome, Processor, Verdict};
pub use progress::{NoProgress, Progress};
pub use registry::{FileRegistry, SearchResult};
