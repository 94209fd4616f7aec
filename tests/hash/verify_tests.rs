// Tests for the checksum verifier

use shazam::hash::verify::{infer_algorithm, matches};
use shazam::hash::{ChecksumError, DigestAlgorithm, FileIdentity, FileRegistry, HashEngine, NoProgress};
use std::path::Path;

use super::{create_test_file, HELLO_MD5, HELLO_SHA256};

fn hashed(dir: &Path, name: &str, reference: Option<&str>, alg: DigestAlgorithm) -> FileIdentity {
    let path = create_test_file(dir, name, b"hello");
    let mut registry = FileRegistry::new();
    let mut file = FileIdentity::new(&path, reference, &mut registry);
    HashEngine::new().compute(&mut file, &[alg], &mut NoProgress).unwrap();
    file
}

#[test]
fn test_exact_match() {
    let dir = tempfile::tempdir().unwrap();
    let file = hashed(dir.path(), "a.txt", Some(HELLO_MD5), DigestAlgorithm::Md5);
    assert!(matches(&file, DigestAlgorithm::Md5).unwrap());
}

#[test]
fn test_case_insensitive_match() {
    let dir = tempfile::tempdir().unwrap();
    let upper = HELLO_SHA256.to_uppercase();
    let file = hashed(dir.path(), "a.txt", Some(&upper), DigestAlgorithm::Sha256);
    assert!(matches(&file, DigestAlgorithm::Sha256).unwrap());
}

#[test]
fn test_leading_zero_padding_match() {
    let dir = tempfile::tempdir().unwrap();
    let padded = format!("0000{}", HELLO_MD5);
    let file = hashed(dir.path(), "a.txt", Some(&padded), DigestAlgorithm::Md5);
    assert!(matches(&file, DigestAlgorithm::Md5).unwrap());
}

#[test]
fn test_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let wrong = "0".repeat(31) + "1";
    let file = hashed(dir.path(), "a.txt", Some(&wrong), DigestAlgorithm::Md5);
    assert!(!matches(&file, DigestAlgorithm::Md5).unwrap());
}

#[test]
fn test_short_reference_never_matches() {
    let dir = tempfile::tempdir().unwrap();
    // the last digit of the real digest is missing
    let truncated = &HELLO_MD5[..31];
    let file = hashed(dir.path(), "a.txt", Some(truncated), DigestAlgorithm::Md5);
    assert!(!matches(&file, DigestAlgorithm::Md5).unwrap());
}

#[test]
fn test_missing_digest() {
    let dir = tempfile::tempdir().unwrap();
    let file = hashed(dir.path(), "a.txt", Some(HELLO_MD5), DigestAlgorithm::Md5);
    let err = matches(&file, DigestAlgorithm::Sha1).unwrap_err();
    assert!(matches!(err, ChecksumError::MissingDigest { .. }));
}

#[test]
fn test_missing_reference() {
    let dir = tempfile::tempdir().unwrap();
    let file = hashed(dir.path(), "a.txt", None, DigestAlgorithm::Md5);
    let err = matches(&file, DigestAlgorithm::Md5).unwrap_err();
    assert!(matches!(err, ChecksumError::MissingReference { .. }));
}

#[test]
fn test_invalid_hex_reference() {
    let dir = tempfile::tempdir().unwrap();
    let file = hashed(dir.path(), "a.txt", Some("not-hex"), DigestAlgorithm::Md5);
    let err = matches(&file, DigestAlgorithm::Md5).unwrap_err();
    assert!(matches!(err, ChecksumError::InvalidHexReference { .. }));
}

#[test]
fn test_infer_from_file_name_first() {
    let mut registry = FileRegistry::new();
    // name says sha1 even though the reference has sha256 length
    let file = FileIdentity::new("image-sha1.iso", Some(HELLO_SHA256), &mut registry);
    assert_eq!(infer_algorithm(&file).unwrap(), DigestAlgorithm::Sha1);
}

#[test]
fn test_infer_from_reference_length() {
    let mut registry = FileRegistry::new();
    let file = FileIdentity::new("image.iso", Some(HELLO_SHA256), &mut registry);
    assert_eq!(infer_algorithm(&file).unwrap(), DigestAlgorithm::Sha256);

    let file = FileIdentity::new("image.iso", Some(HELLO_MD5), &mut registry);
    assert_eq!(infer_algorithm(&file).unwrap(), DigestAlgorithm::Md5);
}

#[test]
fn test_infer_unknown_hash_type() {
    let mut registry = FileRegistry::new();
    let file = FileIdentity::new("image.iso", Some("abc"), &mut registry);
    let err = infer_algorithm(&file).unwrap_err();
    assert!(matches!(err, ChecksumError::UnknownHashType { .. }));

    let file = FileIdentity::new("image.iso", None, &mut registry);
    assert!(infer_algorithm(&file).is_err());
}
