// Verification module
// Compares computed digests against reference checksums by numeric value

use super::algorithm::DigestAlgorithm;
use super::error::ChecksumError;
use super::file::FileIdentity;
use super::hexvalue::HexValue;

/// Check whether the computed digest equals the reference checksum
///
/// Case and leading zero padding of the reference are ignored. A reference
/// shorter than the algorithm's digest length never matches.
pub fn matches(identity: &FileIdentity, algorithm: DigestAlgorithm) -> Result<bool, ChecksumError> {
    let computed = identity
        .digest(algorithm)
        .ok_or_else(|| ChecksumError::MissingDigest {
            path: identity.full_path(),
            algorithm: algorithm.to_string(),
        })?;
    let reference = identity
        .reference()
        .ok_or_else(|| ChecksumError::MissingReference { path: identity.full_path() })?;
    let expected = identity
        .reference_value()
        .ok_or_else(|| ChecksumError::InvalidHexReference { reference: reference.to_string() })?;

    if reference.len() < algorithm.hex_len() {
        tracing::warn!(
            path = %identity.full_path().display(),
            expected_len = algorithm.hex_len(),
            actual_len = reference.len(),
            "reference checksum is shorter than a {} digest", algorithm
        );
        return Ok(false);
    }

    Ok(HexValue::parse(computed).as_ref() == Some(expected))
}

/// Work out which algorithm a reference checksum belongs to
///
/// The file name is searched for an algorithm name first; failing that the
/// length of the reference decides.
pub fn infer_algorithm(identity: &FileIdentity) -> Result<DigestAlgorithm, ChecksumError> {
    if let Some(alg) = DigestAlgorithm::from_file_name(&identity.file_name()) {
        return Ok(alg);
    }
    identity
        .reference()
        .and_then(|r| DigestAlgorithm::from_digest_len(r.len()))
        .ok_or_else(|| ChecksumError::UnknownHashType {
            name: identity.full_path().display().to_string(),
        })
}
