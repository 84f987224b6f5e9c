//! Error types for keyprint operations.
//!
//! This module provides structured error handling using thiserror. The public
//! reporting entry point absorbs all of these into logging; the typed variants
//! exist for callers that use the fallible computation path directly.

use thiserror::Error;

/// Main error type for keyprint operations.
#[derive(Debug, Error)]
pub enum KeyprintError {
    /// The package identity is not known to the signature registry
    #[error("package not found in signature registry: {0}")]
    PackageNotFound(String),

    /// The registry was reachable but the lookup itself failed
    #[error("signature registry lookup failed: {0}")]
    Registry(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors from registry implementations backed by files or sockets
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for keyprint operations
pub type Result<T> = std::result::Result<T, KeyprintError>;
