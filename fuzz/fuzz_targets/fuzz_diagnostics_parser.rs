//! Fuzz target for analyzer diagnostics ingestion.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_diagnostics_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = strictuse_repo::fuzz::parse_diagnostics(text);
    }
});
