//! Project adapters: read the root manifest and lock file, resolve autoload rules and
//! ingest analyzer diagnostics.
//!
//! This crate is allowed to do filesystem IO. It never runs the analyzer itself.

#![forbid(unsafe_code)]

mod autoload;
mod diagnostics;
mod lock;
mod package;
mod project;
mod strict_set;

pub use autoload::AutoloadRules;
pub use diagnostics::{parse_diagnostics, read_diagnostics};
pub use lock::{
    AutoloadDefinition, LockData, PackageDefinition, PrefixRule, RootManifest, parse_lock,
    parse_root_manifest,
};
pub use package::Package;
pub use project::ProjectContext;
pub use strict_set::{StrictCheckSet, installation_path};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use camino::Utf8Path;

    /// Parse arbitrary text as a lock file and classify its packages.
    ///
    /// Returns `Err(...)` on malformed JSON. **Never panics** on any input.
    pub fn classify_lock(text: &str, sentinel: &str) -> anyhow::Result<Vec<String>> {
        let lock = super::parse_lock(text)?;
        let set = super::StrictCheckSet::from_lock(&lock, Utf8Path::new("/fuzz"), sentinel);
        Ok(set.checked_namespaces())
    }

    /// Parse arbitrary text as analyzer output.
    ///
    /// Returns `Err(...)` on malformed input. **Never panics** on any input.
    pub fn parse_diagnostics(text: &str) -> anyhow::Result<usize> {
        Ok(super::parse_diagnostics(text, Utf8Path::new("/fuzz"))?.len())
    }
}
