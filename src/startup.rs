//! Once-per-cold-start reporting hook.
//!
//! Host lifecycle hooks can fire more than once per process (an activity can
//! be recreated); the key hashes only need to appear in the logs once. This
//! module guards the report with a process-wide `Once` so the host can call it
//! unconditionally from its startup path.

use crate::core::package::PackageIdentity;
use crate::registry::SignatureRegistry;
use crate::reporter::FingerprintReporter;
use std::sync::Once;
use tracing::trace;

/// A fire-and-forget report that runs at most once.
#[derive(Debug)]
pub struct ColdStartReport {
    once: Once,
}

impl ColdStartReport {
    /// Create a fresh, not-yet-fired report guard.
    pub const fn new() -> Self {
        ColdStartReport { once: Once::new() }
    }

    /// Run `reporter.report` for `package` if this guard has not fired yet.
    ///
    /// Returns `true` if this call performed the report, `false` if a
    /// previous call already did.
    pub fn run<R>(
        &self,
        reporter: &FingerprintReporter,
        registry: &R,
        package: &PackageIdentity,
    ) -> bool
    where
        R: SignatureRegistry + ?Sized,
    {
        let mut fired = false;
        self.once.call_once(|| {
            reporter.report(registry, package);
            fired = true;
        });
        if !fired {
            trace!(package = %package, "key hash already reported this process");
        }
        fired
    }
}

impl Default for ColdStartReport {
    fn default() -> Self {
        Self::new()
    }
}

static COLD_START: ColdStartReport = ColdStartReport::new();

/// Report `package`'s key hashes with the default reporter, once per process.
pub fn report_once<R>(registry: &R, package: &PackageIdentity) -> bool
where
    R: SignatureRegistry + ?Sized,
{
    COLD_START.run(&FingerprintReporter::new(), registry, package)
}
