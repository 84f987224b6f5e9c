//! Centralized module for cryptographic hashing algorithms.
//!
//! Digests are returned as raw bytes so callers can pick the transport
//! encoding separately; see [`crate::core::fingerprint::Encoding`].

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::fmt;

/// Digest algorithms used for signing-key fingerprints.
///
/// SHA-1 is the default because the key-hash registration flows this crate
/// targets still expect it; it is deprecated for anything security-critical.
/// SHA-256 and MD5 are the other two fingerprints conventionally printed for
/// signing certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Md5,
}

impl DigestAlgorithm {
    /// Compute the digest of `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => sha1_digest(data),
            DigestAlgorithm::Sha256 => sha256_digest(data),
            DigestAlgorithm::Md5 => md5_digest(data),
        }
    }

    /// Length in bytes of digests produced by this algorithm.
    pub fn digest_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Md5 => 16,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Sha1 => write!(f, "SHA-1"),
            DigestAlgorithm::Sha256 => write!(f, "SHA-256"),
            DigestAlgorithm::Md5 => write!(f, "MD5"),
        }
    }
}

/// Computes the SHA-1 digest of the given data (20 bytes).
pub fn sha1_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes the SHA-256 digest of the given data (32 bytes).
pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes the MD5 digest of the given data (16 bytes).
pub fn md5_digest(data: &[u8]) -> Vec<u8> {
    md5::compute(data).0.to_vec()
}
