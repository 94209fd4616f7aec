// Tests for configuration loading

use shazam::config::Config;
use shazam::hash::{ChecksumError, DigestAlgorithm, DEFAULT_CHUNK_SIZE};

use super::create_test_file;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.algorithm().unwrap(), DigestAlgorithm::Sha256);
    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(config.pace_micros, 0);
    assert!(config.progress);
    assert_eq!(config.engine().chunk_size(), DEFAULT_CHUNK_SIZE);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml("default_algorithm = \"md5\"\nchunk_size = 4096\n").unwrap();
    assert_eq!(config.algorithm().unwrap(), DigestAlgorithm::Md5);
    assert_eq!(config.chunk_size, 4096);
    assert!(config.parallel);
}

#[test]
fn test_invalid_toml_values() {
    assert!(Config::from_toml("default_algorithm = \"crc32\"").is_err());
    assert!(Config::from_toml("chunk_size = 0").is_err());
    assert!(Config::from_toml("chunk_size = \"big\"").is_err());
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(Some(&dir.path().join("config.toml"))).unwrap();
    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
}

#[test]
fn test_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_test_file(dir.path(), "config.toml", b"verbose = true\npace_micros = 10\n");
    let config = Config::load(Some(&path)).unwrap();
    assert!(config.verbose);
    assert_eq!(config.pace_micros, 10);
}

#[test]
fn test_load_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_test_file(dir.path(), "config.toml", b"chunk_size = [");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ChecksumError::InvalidConfig { .. }));
}
