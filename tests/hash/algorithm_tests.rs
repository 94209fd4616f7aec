// Tests for the digest algorithm set

use shazam::hash::{ChecksumError, DigestAlgorithm};
use std::path::Path;

#[test]
fn test_hex_lengths() {
    let lengths: Vec<usize> = DigestAlgorithm::ALL.iter().map(|a| a.hex_len()).collect();
    assert_eq!(lengths, vec![32, 40, 56, 64, 96, 128]);
}

#[test]
fn test_from_digest_len_depends_only_on_length() {
    assert_eq!(DigestAlgorithm::from_digest_len(64), Some(DigestAlgorithm::Sha256));
    assert_eq!(DigestAlgorithm::from_digest_len("0".repeat(64).len()), Some(DigestAlgorithm::Sha256));
    assert_eq!(DigestAlgorithm::from_digest_len("f".repeat(64).len()), Some(DigestAlgorithm::Sha256));
    assert_eq!(DigestAlgorithm::from_digest_len(32), Some(DigestAlgorithm::Md5));
    assert_eq!(DigestAlgorithm::from_digest_len(128), Some(DigestAlgorithm::Sha512));
    assert_eq!(DigestAlgorithm::from_digest_len(33), None);
    assert_eq!(DigestAlgorithm::from_digest_len(0), None);
}

#[test]
fn test_from_file_name() {
    assert_eq!(
        DigestAlgorithm::from_file_name("ubuntu-sha256-image.iso"),
        Some(DigestAlgorithm::Sha256)
    );
    assert_eq!(DigestAlgorithm::from_file_name("release.MD5"), Some(DigestAlgorithm::Md5));
    assert_eq!(DigestAlgorithm::from_file_name("notes.txt"), None);
}

#[test]
fn test_from_file_name_prefers_longest_match() {
    // "sha1" and "sha512" are both present; the longer name wins
    assert_eq!(
        DigestAlgorithm::from_file_name("sha1-and-sha512.bin"),
        Some(DigestAlgorithm::Sha512)
    );
    // equal length: the later algorithm wins
    assert_eq!(
        DigestAlgorithm::from_file_name("sha224_sha256.bin"),
        Some(DigestAlgorithm::Sha256)
    );
}

#[test]
fn test_from_manifest_name() {
    assert_eq!(
        DigestAlgorithm::from_manifest_name(Path::new("SHA256SUMS")),
        Some(DigestAlgorithm::Sha256)
    );
    assert_eq!(
        DigestAlgorithm::from_manifest_name(Path::new("dir/md5sum.txt")),
        Some(DigestAlgorithm::Md5)
    );
    assert_eq!(
        DigestAlgorithm::from_manifest_name(Path::new("release-sha512sums.txt")),
        Some(DigestAlgorithm::Sha512)
    );
    assert_eq!(DigestAlgorithm::from_manifest_name(Path::new("checksums.txt")), None);
    assert_eq!(DigestAlgorithm::from_manifest_name(Path::new("sha256.txt")), None);
}

#[test]
fn test_manifest_names_cover_every_algorithm() {
    let names = DigestAlgorithm::manifest_names();
    assert_eq!(names.len(), 12);
    assert!(names.contains(&"sha384sums".to_string()));
    assert!(names.contains(&"md5sum".to_string()));
}

#[test]
fn test_parse_algorithm_names() {
    assert_eq!("SHA-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
    assert_eq!("md5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
    assert_eq!(DigestAlgorithm::Sha384.to_string(), "sha384");

    let err = "blake3".parse::<DigestAlgorithm>().unwrap_err();
    assert!(matches!(err, ChecksumError::UnsupportedAlgorithm { .. }));
}

#[test]
fn test_accumulator_empty_input() {
    let expected = [
        "d41d8cd98f00b204e9800998ecf8427e",
        "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    ];
    for (alg, want) in DigestAlgorithm::ALL.iter().zip(expected) {
        let acc = alg.accumulator();
        assert_eq!(acc.algorithm(), *alg);
        let hex = acc.finalize_hex();
        assert_eq!(hex.len(), alg.hex_len());
        assert_eq!(hex, want, "{}", alg);
    }
}

#[test]
fn test_accumulator_split_updates() {
    let mut whole = DigestAlgorithm::Md5.accumulator();
    whole.update(b"hello");

    let mut split = DigestAlgorithm::Md5.accumulator();
    split.update(b"he");
    split.update(b"llo");

    assert_eq!(whole.finalize_hex(), split.finalize_hex());
}
