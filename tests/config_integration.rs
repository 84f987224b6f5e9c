//! Tests for reporter configuration defaults and serde behavior.

use keyprint::{DigestAlgorithm, Encoding, ReporterConfig};

#[test]
fn test_reporter_config_defaults() {
    let config = ReporterConfig::default();

    // The defaults match the key-hash registration format.
    assert_eq!(config.algorithm, DigestAlgorithm::Sha1);
    assert_eq!(config.encoding, Encoding::Base64);
}

#[test]
fn test_config_serde_round_trip() {
    let config = ReporterConfig {
        algorithm: DigestAlgorithm::Sha256,
        encoding: Encoding::HexColon,
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: ReporterConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn test_config_from_json() {
    let config: ReporterConfig =
        serde_json::from_str(r#"{"algorithm":"Md5","encoding":"Hex"}"#).unwrap();
    assert_eq!(config.algorithm, DigestAlgorithm::Md5);
    assert_eq!(config.encoding, Encoding::Hex);
}
