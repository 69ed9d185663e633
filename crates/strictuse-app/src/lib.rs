//! Use case orchestration for strictuse.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo,
//! settings and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod config;
mod plan;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use config::resolve_settings;
pub use plan::{AnalysisPlan, PlanOutcome, SkipReason, plan_for, run_plan};
pub use render::{
    render_annotations, render_done_line, render_finding_lines, render_markdown,
    render_plan_lines,
};
pub use report::{
    parse_report_json, runtime_error_report, serialize_report, serialize_scope, skipped_report,
    to_renderable,
};
