//! The signing fingerprint reporter.
//!
//! Produces a human-readable fingerprint of an application's code-signing
//! certificates for development logs, so a developer can register the value
//! with third-party services that authenticate by signing-key hash.
//!
//! Two entry points: [`FingerprintReporter::compute`] returns typed errors,
//! and [`FingerprintReporter::report`] is the best-effort diagnostic used on
//! the startup path. `report` never propagates a failure; it routes it to the
//! log stream and returns an empty sequence, so a caller cannot distinguish
//! "zero signatures" from "lookup failed" without inspecting logs. That is
//! deliberate: a diagnostic must never abort or delay application startup.

use crate::core::fingerprint::{Encoding, Fingerprint};
use crate::core::package::PackageIdentity;
use crate::error::Result;
use crate::hashing::DigestAlgorithm;
use crate::registry::SignatureRegistry;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Configuration for fingerprint reporting.
///
/// The defaults (SHA-1 digest, base64 rendering) match the key-hash format
/// expected by the identity services this diagnostic exists for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Digest algorithm applied to each signature record.
    pub algorithm: DigestAlgorithm,
    /// Transport encoding for the rendered fingerprint.
    pub encoding: Encoding,
}

/// Stateless reporter; each invocation is an independent query-and-report.
#[derive(Debug, Clone, Copy, Default)]
pub struct FingerprintReporter {
    config: ReporterConfig,
}

impl FingerprintReporter {
    /// Create a reporter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter with an explicit configuration.
    pub fn with_config(config: ReporterConfig) -> Self {
        FingerprintReporter { config }
    }

    /// The active configuration.
    pub fn config(&self) -> ReporterConfig {
        self.config
    }

    /// Compute one fingerprint per signature record of `package`, preserving
    /// registry order.
    pub fn compute<R>(&self, registry: &R, package: &PackageIdentity) -> Result<Vec<Fingerprint>>
    where
        R: SignatureRegistry + ?Sized,
    {
        let records = registry.signatures(package)?;
        Ok(records
            .iter()
            .map(|record| Fingerprint::compute(record, self.config.algorithm, self.config.encoding))
            .collect())
    }

    /// Report the key hashes of `package` to the diagnostic log stream.
    ///
    /// On success every fingerprint is logged and returned; a lookup with no
    /// records logs a neutral note. On failure exactly one error entry is
    /// logged and an empty sequence is returned. Never panics, never
    /// propagates.
    pub fn report<R>(&self, registry: &R, package: &PackageIdentity) -> Vec<Fingerprint>
    where
        R: SignatureRegistry + ?Sized,
    {
        match self.compute(registry, package) {
            Ok(fingerprints) => {
                if fingerprints.is_empty() {
                    debug!(package = %package, "no signature records to report");
                } else {
                    for fingerprint in &fingerprints {
                        debug!(
                            package = %package,
                            algorithm = %fingerprint.algorithm,
                            key_hash = %fingerprint.encoded,
                            "signing key hash"
                        );
                    }
                }
                fingerprints
            }
            Err(e) => {
                error!(package = %package, error = %e, "error generating key hash");
                Vec::new()
            }
        }
    }
}
