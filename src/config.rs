//! User configuration loaded from `~/.config/shazam/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hash::{ChecksumError, DigestAlgorithm, HashEngine, DEFAULT_CHUNK_SIZE};

/// Settings that shape every invocation; command line flags override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Algorithm used by `sum` when none is given.
    pub default_algorithm: String,
    /// Bytes read per chunk while hashing.
    pub chunk_size: usize,
    /// Pause between chunk reads in microseconds (0 = none).
    pub pace_micros: u64,
    /// Feed several algorithms in parallel when more than one is computed.
    pub parallel: bool,
    /// Show progress bars.
    pub progress: bool,
    /// Show reference and computed checksums for every checked file.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: DigestAlgorithm::Sha256.name().to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            pace_micros: 0,
            parallel: true,
            progress: true,
            verbose: false,
        }
    }
}

impl Config {
    /// Default location of the configuration file, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shazam").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    /// A missing file yields the defaults; an unparsable one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ChecksumError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Ok(Self::default()),
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| ChecksumError::from_io_error(e, "reading config", Some(path.clone())))?;
        let config = Self::from_toml(&text).map_err(|reason| ChecksumError::InvalidConfig {
            path: path.clone(),
            reason,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(text).map_err(|e| e.to_string())?;
        config.algorithm().map_err(|e| e.to_string().lines().next().unwrap_or_default().to_string())?;
        if config.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        Ok(config)
    }

    pub fn algorithm(&self) -> Result<DigestAlgorithm, ChecksumError> {
        self.default_algorithm.parse()
    }

    /// Hash engine configured from these settings.
    pub fn engine(&self) -> HashEngine {
        let pace = (self.pace_micros > 0).then(|| Duration::from_micros(self.pace_micros));
        HashEngine::with_chunk_size(self.chunk_size)
            .with_pace(pace)
            .with_parallel(self.parallel)
    }
}
