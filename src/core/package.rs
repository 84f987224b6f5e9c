//! Package identity and signature record types.
//!
//! Both are opaque values owned by the host operating system's
//! package-management facility; this crate only reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// OS-level unique name of an installed application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageIdentity {
    /// The package name, e.g. `com.example.sporify`
    pub name: String,
}

impl PackageIdentity {
    /// Create a new package identity from a package name.
    pub fn new(name: impl Into<String>) -> Self {
        PackageIdentity { name: name.into() }
    }

    /// The package name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for PackageIdentity {
    fn from(name: &str) -> Self {
        PackageIdentity::new(name)
    }
}

/// Raw bytes of one code-signing certificate attached to an installed
/// package. A package may carry zero or more of these; the registry's order
/// is preserved but carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    /// The certificate bytes as handed over by the host.
    pub bytes: Vec<u8>,
}

impl SignatureRecord {
    /// Create a signature record from raw certificate bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        SignatureRecord {
            bytes: bytes.into(),
        }
    }

    /// The raw certificate bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the record.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
