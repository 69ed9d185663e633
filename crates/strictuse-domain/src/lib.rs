//! Pure diagnostic evaluation (no IO).
//!
//! Input: analyzer diagnostics plus the namespaces whose usages are strictly checked.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod filter;
pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;

pub use engine::evaluate;
pub use filter::ReportFilter;
pub use fingerprint::fingerprint_for_diagnostic;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
