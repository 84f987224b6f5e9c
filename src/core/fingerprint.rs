//! Fingerprint type and transport encodings.
//!
//! A fingerprint is a digest of one signature record plus its text rendering.
//! The rendering exists for human/log consumption only; nothing here defines a
//! canonical value to compare against.

use crate::core::package::SignatureRecord;
use crate::error::{KeyprintError, Result};
use crate::hashing::DigestAlgorithm;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte-to-text transport encodings for digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// Standard base64 with padding, the key-hash registration format.
    #[default]
    Base64,
    /// Lowercase hex.
    Hex,
    /// Uppercase hex in colon-separated byte pairs, keytool style.
    HexColon,
}

impl Encoding {
    /// Encode digest bytes into this encoding's text form.
    pub fn encode(&self, digest: &[u8]) -> String {
        match self {
            Encoding::Base64 => BASE64.encode(digest),
            Encoding::Hex => hex::encode(digest),
            Encoding::HexColon => digest
                .iter()
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(":"),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Base64 => write!(f, "base64"),
            Encoding::Hex => write!(f, "hex"),
            Encoding::HexColon => write!(f, "hex-colon"),
        }
    }
}

/// One computed signing-key fingerprint.
///
/// Created at the moment of a reporting call, logged, and discarded; nothing
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Algorithm that produced the digest.
    pub algorithm: DigestAlgorithm,
    /// Encoding used for the text rendering.
    pub encoding: Encoding,
    /// Raw digest bytes (20 for SHA-1, 32 for SHA-256, 16 for MD5).
    pub digest: Vec<u8>,
    /// The digest rendered through `encoding`.
    pub encoded: String,
}

impl Fingerprint {
    /// Compute the fingerprint of one signature record.
    pub fn compute(
        record: &SignatureRecord,
        algorithm: DigestAlgorithm,
        encoding: Encoding,
    ) -> Self {
        let digest = algorithm.digest(record.as_bytes());
        let encoded = encoding.encode(&digest);
        Fingerprint {
            algorithm,
            encoding,
            digest,
            encoded,
        }
    }

    /// Serialize to JSON for structured log/export consumers.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| KeyprintError::Serialization(e.to_string()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DATA: &[u8] = b"test";

    #[test]
    fn test_base64_encoding() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Sha1,
            Encoding::Base64,
        );
        assert_eq!(fp.encoded, "qUqP5cyxm6YcTAhz05Hph5gvu9M=");
        assert_eq!(fp.digest.len(), 20);
    }

    #[test]
    fn test_hex_encoding() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Sha1,
            Encoding::Hex,
        );
        assert_eq!(fp.encoded, "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
    }

    #[test]
    fn test_hex_colon_encoding() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Sha1,
            Encoding::HexColon,
        );
        assert_eq!(
            fp.encoded,
            "A9:4A:8F:E5:CC:B1:9B:A6:1C:4C:08:73:D3:91:E9:87:98:2F:BB:D3"
        );
    }

    #[test]
    fn test_sha256_base64() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Sha256,
            Encoding::Base64,
        );
        assert_eq!(fp.encoded, "n4bQgYhMfWWaL+qgxVrQFaO/TxsrC4Is0V1sFbDwCgg=");
    }

    #[test]
    fn test_md5_hex() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Md5,
            Encoding::Hex,
        );
        assert_eq!(fp.encoded, "098f6bcd4621d373cade4e832627b4f6");
    }

    #[test]
    fn test_display_is_encoded_form() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Sha1,
            Encoding::Base64,
        );
        assert_eq!(fp.to_string(), fp.encoded);
    }

    #[test]
    fn test_to_json() {
        let fp = Fingerprint::compute(
            &SignatureRecord::new(TEST_DATA.to_vec()),
            DigestAlgorithm::Sha1,
            Encoding::Base64,
        );
        let json = fp.to_json().unwrap();
        assert!(json.contains("qUqP5cyxm6YcTAhz05Hph5gvu9M="));
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(fp, back);
    }

    #[test]
    fn test_default_encoding_is_base64() {
        assert_eq!(Encoding::default(), Encoding::Base64);
    }
}
