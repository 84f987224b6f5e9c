//! Keyprint: signing-key fingerprint reporting for application packages.
//!
//! Given a package identity and a signature registry (the host's
//! package-management facility, injected as a trait so the logic stays
//! testable without a real device), this crate computes a cryptographic digest
//! of each code-signing certificate attached to the package and renders it in
//! a transport-safe text encoding for developer-facing logs. The canonical use
//! is printing the debug key hash a developer must register with third-party
//! identity services that authenticate applications by signing key.

/// Core data types: package identity, signature records, fingerprints.
pub mod core;
/// Error types for keyprint operations.
pub mod error;
/// Message digest computation over signature records.
pub mod hashing;
/// Logging and tracing infrastructure.
pub mod logging;
/// Signature registry abstraction over the host package manager.
pub mod registry;
/// The fingerprint reporter itself.
pub mod reporter;
/// Once-per-cold-start reporting hook.
pub mod startup;

pub use crate::core::fingerprint::{Encoding, Fingerprint};
pub use crate::core::package::{PackageIdentity, SignatureRecord};
pub use crate::error::{KeyprintError, Result};
pub use crate::hashing::DigestAlgorithm;
pub use crate::registry::{SignatureRegistry, StaticRegistry};
pub use crate::reporter::{FingerprintReporter, ReporterConfig};
