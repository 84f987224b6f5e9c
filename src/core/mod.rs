//! Core data types for signing-key fingerprint reporting.

/// Fingerprint and transport-encoding types
pub mod fingerprint;
/// Package identity and signature record types
pub mod package;

pub use fingerprint::{Encoding, Fingerprint};
pub use package::{PackageIdentity, SignatureRecord};
