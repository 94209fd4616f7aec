// Test entry point for hash tests
// All checksum core tests organized here

mod algorithm_tests;
mod config_tests;
mod verify_tests;

use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` to `dir/name`, creating parent directories
pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

pub const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";
pub const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
pub const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
