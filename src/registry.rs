//! Signature registry abstraction.
//!
//! The real registry is the host operating system's package-management
//! facility, which has no portable equivalent. It is modeled as a trait so the
//! fingerprint logic can be exercised without a device; hosts implement it
//! over whatever FFI surface they have.

use crate::core::package::{PackageIdentity, SignatureRecord};
use crate::error::{KeyprintError, Result};
use std::collections::HashMap;

/// Source of code-signing certificate records for installed packages.
pub trait SignatureRegistry {
    /// Look up the signature records attached to `package`, in the order the
    /// host reports them. An installed package may legitimately have zero
    /// records; an unknown package is an error.
    fn signatures(&self, package: &PackageIdentity) -> Result<Vec<SignatureRecord>>;
}

/// In-memory registry mapping package identities to signature records.
///
/// Used in tests, and by hosts that fetch the records through their own
/// bindings and hand them over.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: HashMap<PackageIdentity, Vec<SignatureRecord>>,
}

impl StaticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `records` as the signatures of `package`, replacing any
    /// previous entry.
    pub fn insert(&mut self, package: PackageIdentity, records: Vec<SignatureRecord>) {
        self.entries.insert(package, records);
    }

    /// Number of packages registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no packages are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SignatureRegistry for StaticRegistry {
    fn signatures(&self, package: &PackageIdentity) -> Result<Vec<SignatureRecord>> {
        self.entries
            .get(package)
            .cloned()
            .ok_or_else(|| KeyprintError::PackageNotFound(package.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_package() {
        let pkg = PackageIdentity::new("com.example.sporify");
        let mut registry = StaticRegistry::new();
        registry.insert(
            pkg.clone(),
            vec![SignatureRecord::new(b"cert".to_vec())],
        );

        let records = registry.signatures(&pkg).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_bytes(), b"cert");
    }

    #[test]
    fn test_lookup_unknown_package() {
        let registry = StaticRegistry::new();
        let err = registry
            .signatures(&PackageIdentity::new("com.missing.app"))
            .unwrap_err();
        assert!(matches!(err, KeyprintError::PackageNotFound(_)));
    }

    #[test]
    fn test_zero_records_is_not_an_error() {
        let pkg = PackageIdentity::new("com.example.unsigned");
        let mut registry = StaticRegistry::new();
        registry.insert(pkg.clone(), Vec::new());
        assert!(registry.signatures(&pkg).unwrap().is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let pkg = PackageIdentity::new("com.example.sporify");
        let mut registry = StaticRegistry::new();
        registry.insert(pkg.clone(), vec![SignatureRecord::new(b"old".to_vec())]);
        registry.insert(pkg.clone(), vec![SignatureRecord::new(b"new".to_vec())]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.signatures(&pkg).unwrap()[0].as_bytes(), b"new");
    }
}
