//! Rendering utilities for the console and CI surfaces (Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod console;
mod gha;
mod markdown;
mod model;

pub use console::{
    render_done_line, render_finding_line, render_package_lines, render_skip_line,
    render_start_line,
};
pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderablePackage, RenderableReport,
    RenderableSeverity, RenderableSkip, RenderableVerdictStatus,
};
