//! Progress lines printed while the host package manager runs the hook.

use strictuse_types::ids::TOOL_NAME;

use crate::{RenderableFinding, RenderablePackage, RenderableSeverity, RenderableSkip};

pub fn render_skip_line(skip: RenderableSkip) -> String {
    match skip {
        RenderableSkip::NotEnforced => {
            format!("{TOOL_NAME}: plugin not installed locally - skipping type checks...")
        }
        RenderableSkip::OwnAnalyzerConfig => format!(
            "{TOOL_NAME}: psalm configuration detected - assuming static analysis will run later; not running psalm now"
        ),
    }
}

pub fn render_start_line() -> String {
    format!("{TOOL_NAME}: checking strictly type-checked packages...")
}

/// Header, then one line per package followed by one line per namespace it declares.
pub fn render_package_lines(packages: &[RenderablePackage]) -> Vec<String> {
    let mut out = vec![format!(
        "{TOOL_NAME}: following package usages will be checked:"
    )];
    for package in packages {
        out.push(format!(" - {}", package.name));
        for namespace in &package.namespaces {
            out.push(format!(" - - {namespace}"));
        }
    }
    out
}

/// One line per finding: `ERROR InvalidArgument src/App.php:3: message (subject)`.
pub fn render_finding_line(f: &RenderableFinding) -> String {
    let sev = match f.severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARNING",
        RenderableSeverity::Error => "ERROR",
    };
    let mut line = format!("{sev} {}", f.code);
    if let Some(loc) = &f.location {
        line.push(' ');
        line.push_str(&loc.path);
        if let Some(n) = loc.line {
            line.push_str(&format!(":{n}"));
        }
    }
    line.push_str(&format!(": {}", f.message));
    if let Some(subject) = &f.subject {
        line.push_str(&format!(" ({subject})"));
    }
    line
}

pub fn render_done_line() -> String {
    format!("{TOOL_NAME}: ... done checking strictly type-checked packages")
}
