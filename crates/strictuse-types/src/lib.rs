//! Stable DTOs and IDs used across the strictuse workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report and analysis scope
//! - stable string IDs, file names and reason codes
//! - canonical project-relative path handling

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod scope;

pub use diagnostic::DiagnosticKind;
pub use path::RepoPath;
pub use receipt::{
    Finding, Location, PackageSummary, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, Severity,
    StrictUseData, StrictUseReport, ToolMeta, Verdict, VerdictCounts, VerdictStatus,
};
pub use scope::{AnalysisScope, SCHEMA_SCOPE_V1};
